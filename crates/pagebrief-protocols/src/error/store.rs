//! Key-value store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage is corrupted: {0}")]
    Corrupted(String),

    #[error("Storage serialization failed: {0}")]
    Serialization(String),
}
