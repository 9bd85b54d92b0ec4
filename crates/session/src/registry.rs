//! Registry of image URLs that failed for good
//!
//! A URL lands here once every load attempt for it has failed. Any later
//! mount of the same resource in the same session goes straight to the
//! fallback instead of hitting the network again.

use std::sync::{Arc, Mutex};

use folio_assets::{is_local, normalize_key};
use log::{debug, warn};

use crate::error::StoreResult;
use crate::store::SessionStore;

/// Storage key holding the JSON list of failed URLs
pub const FAILED_URLS_KEY: &str = "imageFailedUrls";

/// Failure bookkeeping as seen by image components
pub trait FailureRegistry {
    /// Whether `url` names a resource already recorded as failed
    ///
    /// Local assets are never reported as failed.
    fn contains(&self, url: &str) -> bool;

    /// Record `url` as failed; recording the same URL twice is a no-op
    fn record(&self, url: &str);
}

/// Registry shared by every image on the page
pub type SharedRegistry = Arc<dyn FailureRegistry + Send + Sync>;

/// Failure registry persisted in a session store
///
/// Raw URLs are stored as recorded; comparisons go through
/// [`normalize_key`]. Storage faults are swallowed and the registry behaves
/// as empty for that operation. Recording is serialized so concurrent
/// failures never overwrite each other's entries.
#[derive(Debug)]
pub struct FailedUrlRegistry<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: SessionStore> FailedUrlRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw failed URLs in the order they were recorded
    pub fn failed_urls(&self) -> Vec<String> {
        self.read().unwrap_or_else(|e| {
            debug!("Failed URL list unreadable, treating as empty: {}", e);
            Vec::new()
        })
    }

    fn read(&self) -> StoreResult<Vec<String>> {
        match self.store.get(FAILED_URLS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, urls: &[String]) -> StoreResult<()> {
        let json = serde_json::to_string(urls)?;
        self.store.set(FAILED_URLS_KEY, &json)
    }
}

impl<S: SessionStore> FailureRegistry for FailedUrlRegistry<S> {
    fn contains(&self, url: &str) -> bool {
        if url.is_empty() || is_local(url) {
            return false;
        }

        let key = normalize_key(url);
        self.failed_urls()
            .iter()
            .any(|failed| normalize_key(failed) == key)
    }

    fn record(&self, url: &str) {
        if url.is_empty() || is_local(url) {
            debug!("Not recording local image as failed: {}", url);
            return;
        }

        // Held across read-modify-write; a poisoned guard protects no data
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut urls = self.failed_urls();
        if urls.iter().any(|failed| failed == url) {
            return;
        }

        urls.push(url.to_string());
        if let Err(e) = self.write(&urls) {
            warn!("Could not persist failed image URL {}: {}", url, e);
        }
    }
}
