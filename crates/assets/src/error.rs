//! Asset resolution error types

use thiserror::Error;

/// Asset resolution result type
pub type AssetResult<T> = Result<T, AssetError>;

/// Asset resolution errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Empty image source")]
    EmptySource,

    #[error("Not a remote source: {0}")]
    NotRemote(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
