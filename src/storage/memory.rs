use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local store; nothing survives the process.
pub struct MemStore {
    pub data: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError> {
        self.data.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
