//! Key-value persistence boundary for the White Cross client.
//!
//! The token security crates persist everything — encrypted session records
//! and encryption key material — through the [`KeyValueStore`] trait, so the
//! same code runs against browser local storage, an on-disk store, or the
//! in-memory store used by tests. All values are strings; callers own the
//! serialization format.

pub mod error;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

pub use error::StorageError;
pub use memory::MemoryStore;

/// String key-value store with async reads and writes.
///
/// Browser local storage is synchronous, but the trait is async so
/// IndexedDB-style backends fit without changing callers. No ordering is
/// guaranteed across concurrent callers; last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a store, cloned across the managers that use it.
pub type SharedStore = Arc<dyn KeyValueStore>;
