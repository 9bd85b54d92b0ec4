//! Session storage error types

use thiserror::Error;

/// Session storage result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Session storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt session data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
