//! Errors raised while fetching over HTTP

use thiserror::Error;

pub type NetResult<T> = Result<T, NetError>;

/// Why a fetch produced no usable body
#[derive(Debug, Error)]
pub enum NetError {
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Could not connect: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Too many redirects")]
    TooManyRedirects,

    #[error("Server answered {status}")]
    HttpError { status: u16 },
}

impl From<reqwest::Error> for NetError {
    fn from(err: reqwest::Error) -> Self {
        match err {
            e if e.is_timeout() => NetError::Timeout,
            e if e.is_connect() => NetError::ConnectionError(e.to_string()),
            e if e.is_redirect() => NetError::TooManyRedirects,
            e => NetError::RequestFailed(e.to_string()),
        }
    }
}
