//! Authentication token lifecycle for the White Cross client.
//!
//! [`TokenSecurityManager`] owns the stored session record: encrypted
//! persistence, expiration-aware retrieval, user-profile updates, clearing,
//! and cleanup of legacy pre-encryption storage keys. Login, logout, and
//! HTTP-client code sit above it; the key-value store and AES-GCM primitives
//! sit below it.
//!
//! Per stored record the lifecycle is
//! `ABSENT -> STORED(valid) -> STORED(expired) -> ABSENT`, where the final
//! transition happens either via [`TokenSecurityManager::clear_token`] or
//! implicitly the next time [`TokenSecurityManager::get_valid_token`]
//! observes an expired or unreadable record. Token refresh is the caller's
//! job; this crate only logs an advisory warning when expiry is near.
//!
//! Construct one manager per session context and share it; there is no
//! module-level global. Concurrent callers get last-write-wins semantics at
//! the store with no locking, which is fine for a single logical session but
//! a known gap for multi-tab use.

pub mod clock;
pub mod error;
pub mod manager;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use error::AuthError;
pub use manager::{
    TokenSecurityManager, AUTH_DATA_STORAGE_KEY, DEFAULT_TOKEN_LIFETIME_MS,
    EXPIRY_WARNING_BUFFER_MS, LEGACY_STORAGE_KEYS,
};
pub use types::{TokenRecord, UserProfile};

pub use whitecross_crypto::{
    CryptoError, EncryptedPayload, EncryptionManager, ENCRYPTION_KEY_STORAGE_KEY,
};
pub use whitecross_storage::{KeyValueStore, MemoryStore, SharedStore, StorageError};
