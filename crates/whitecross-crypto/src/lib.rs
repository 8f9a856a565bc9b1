//! AES-256-GCM encryption for White Cross client session data.
//!
//! One symmetric key per client installation, generated on first init and
//! persisted (base64 raw export) in the same key-value store as the data it
//! protects. That placement is a deliberate, documented trade-off: it defends
//! against casual inspection of storage contents, not against script-level
//! (XSS) compromise — any code that can read the store can read the key.
//!
//! AES-GCM is authenticated encryption: tampering with stored ciphertext is
//! a detected decryption failure, never silently garbage-decoded plaintext.
//! The IV is freshly random for every encryption call; reusing a (key, IV)
//! pair breaks GCM confidentiality.

pub mod error;
pub mod manager;
pub mod payload;

pub use error::CryptoError;
pub use manager::{EncryptionManager, ENCRYPTION_KEY_STORAGE_KEY};
pub use payload::EncryptedPayload;

/// AES-256 key length in bytes.
pub const AES_KEY_LENGTH: usize = 32;

/// AES-GCM IV length in bytes.
pub const AES_GCM_IV_LENGTH: usize = 12;
