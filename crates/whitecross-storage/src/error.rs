use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage read failed for key \"{key}\": {message}")]
    ReadFailed { key: String, message: String },

    #[error("Storage write failed for key \"{key}\": {message}")]
    WriteFailed { key: String, message: String },

    #[error("Storage remove failed for key \"{key}\": {message}")]
    RemoveFailed { key: String, message: String },

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}
