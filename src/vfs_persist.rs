use crate::log;
use crate::persist::{KeyValueStorage, StorageError};
use crate::vfs::{FileRecord, SessionStore};
use std::collections::HashMap;

impl<S: KeyValueStorage> SessionStore<S> {
    pub(crate) fn read_table(&self) -> HashMap<String, FileRecord> {
        match self.try_read_table() {
            Ok(files) => files,
            Err(e) => {
                log::error(&format!("failed to load session files: {}", e));
                HashMap::new()
            }
        }
    }

    fn try_read_table(&self) -> Result<HashMap<String, FileRecord>, StorageError> {
        match self.storage().get(self.storage_key())? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(HashMap::new()),
        }
    }

    pub(crate) fn write_table(&mut self) {
        if let Err(e) = self.try_write_table() {
            log::error(&format!("failed to save session files: {}", e));
        }
    }

    fn try_write_table(&mut self) -> Result<(), StorageError> {
        let key = self.storage_key().to_string();
        let (files, storage) = self.parts_mut();
        let json = serde_json::to_string(files)?;
        storage.set(&key, &json)
    }

    pub(crate) fn remove_table(&mut self) {
        let key = self.storage_key().to_string();
        let (_, storage) = self.parts_mut();
        if let Err(e) = storage.remove(&key) {
            log::error(&format!("failed to remove session files: {}", e));
        }
    }
}
