use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Defaults-style store: the value of key `k` lives in `<dir>/<k>.json`.
pub struct FileDefaults {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileDefaults {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            medium: "file".to_string(),
            dir: dir.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileDefaults {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        // Write beside the target and rename, so a failed write leaves the old value intact.
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = write_and_swap(&tmp, &path, value) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        debug!(path = %path.display(), bytes = value.len(), "value written");
        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

fn write_and_swap(tmp: &Path, path: &Path, value: &[u8]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    file.write_all(value)?;
    file.sync_all()?;
    fs::rename(tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileDefaults::new(dir.path());

        assert_eq!(store.get("allContactsKey")?, None);
        Ok(())
    }

    #[test]
    fn set_creates_data_dir_and_overwrites() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileDefaults::new(dir.path().join("nested").join(".instance"));

        store.set("allContactsKey", b"[1]")?;
        store.set("allContactsKey", b"[]")?;

        assert_eq!(store.get("allContactsKey")?, Some(b"[]".to_vec()));
        assert!(store.path_for("allContactsKey").exists());
        assert!(!store.path_for("allContactsKey").with_extension("json.tmp").exists());
        Ok(())
    }

    #[test]
    fn failed_swap_cleans_up_temp_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileDefaults::new(dir.path());
        // A non-empty directory where the value file belongs makes the rename fail
        let target = store.path_for("allContactsKey");
        fs::create_dir_all(target.join("occupied"))?;

        assert!(store.set("allContactsKey", b"[]").is_err());
        assert!(!target.with_extension("json.tmp").exists());
        Ok(())
    }

    #[test]
    fn keys_are_separate_files() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileDefaults::new(dir.path());

        store.set("a", b"1")?;
        store.set("b", b"2")?;

        assert_eq!(store.get("a")?, Some(b"1".to_vec()));
        assert_eq!(store.get("b")?, Some(b"2".to_vec()));
        Ok(())
    }
}
