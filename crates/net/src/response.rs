//! HTTP response representation

use std::collections::HashMap;

use crate::error::{NetError, NetResult};

/// HTTP response
#[derive(Debug)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers, lowercased names
    pub headers: HashMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the Content-Type header
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }

    /// Whether the server labelled the body as an image
    ///
    /// A missing Content-Type is given the benefit of the doubt.
    pub fn is_image(&self) -> bool {
        self.content_type()
            .map(|ct| ct.to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(true)
    }

    /// Consume the response, keeping the body only if the status was 2xx
    pub fn into_body(self) -> NetResult<Vec<u8>> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(NetError::HttpError { status: self.status })
        }
    }
}
