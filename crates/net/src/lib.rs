//! Folio Network Layer
//!
//! Fetches remote image bytes over HTTP/HTTPS.

mod client;
mod error;
mod response;

pub use client::{ClientConfig, HttpClient};
pub use error::{NetError, NetResult};
pub use response::Response;
