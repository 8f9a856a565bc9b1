use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("No encryption key available; call init() and check is_encryption_available()")]
    NoKey,

    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Base64 decode error: {0}")]
    Base64Decode(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Encryption key storage failed: {0}")]
    KeyStorage(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
