use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {key}")]
    NotFound { key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
