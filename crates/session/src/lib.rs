//! Folio Session State
//!
//! Session-scoped key/value storage and the registry of image URLs known to
//! be unloadable for the rest of the session.

mod error;
mod registry;
mod store;

pub use error::{StoreError, StoreResult};
pub use registry::{FailedUrlRegistry, FailureRegistry, SharedRegistry, FAILED_URLS_KEY};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
