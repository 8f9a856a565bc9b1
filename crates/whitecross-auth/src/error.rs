use thiserror::Error;

use whitecross_crypto::CryptoError;
use whitecross_storage::StorageError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token lifetime must be positive, got {0}ms")]
    InvalidLifetime(i64),

    #[error("Stored token has expired")]
    Expired,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
