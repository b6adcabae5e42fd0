pub mod file;
pub mod memory;

use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = "./.instance";

/// Byte values addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    File,
    Mem,
}

impl StorageMedium {
    pub fn is_file(&self) -> bool {
        matches!(self, StorageMedium::File)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMedium::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_file() { "file" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "file" => Ok(StorageMedium::File),
            "mem" => Ok(StorageMedium::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: {str}"
            ))),
        }
    }
}

pub fn open_storage(medium: StorageMedium, data_dir: &str) -> Box<dyn KeyValueStore> {
    match medium {
        StorageMedium::File => Box::new(file::FileDefaults::new(data_dir)),
        StorageMedium::Mem => Box::new(memory::MemStore::new()),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
