use thiserror::Error;

use crate::validation::FieldErrors;

/// Failures reported by a `Store` backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key '{key}': {message}")]
    ReadFailed { key: String, message: String },
    #[error("failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// The in-memory list changed but could not be written back.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to encode reviews: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review form has errors: {0}")]
    Validation(FieldErrors),
    #[error("review index {index} is out of range for {len} reviews")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("review saved in memory only: {0}")]
    Persistence(#[from] PersistenceError),
}
