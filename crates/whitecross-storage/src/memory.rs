//! In-memory `KeyValueStore` backed by a HashMap.
//!
//! Reference implementation and test double. Interior mutability via
//! `parking_lot::Mutex` (Send + Sync on all targets); uncontended locks are
//! near-zero overhead on single-threaded WASM.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{KeyValueStore, StorageError};

/// HashMap-backed store. Cheap to construct, nothing persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries. Test helper.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
