//! In-memory storage

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::storage::{Storage, StorageError};

/// Process-local storage, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if the storage lock was poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        self.entries
            .read()
            .map(|entries| entries.len())
            .map_err(|_err| StorageError::Poisoned)
    }

    /// Check if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if the storage lock was poisoned.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_err| StorageError::Poisoned)?;

        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_err| StorageError::Poisoned)?;

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_err| StorageError::Poisoned)?;

        entries.remove(key);

        Ok(())
    }
}
