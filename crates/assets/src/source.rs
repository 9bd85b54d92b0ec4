//! Image source classification

use url::Url;

use crate::error::{AssetError, AssetResult};

/// Where the bytes for an image source come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// No source at all
    Empty,
    /// Bundled asset served alongside the page
    Local,
    /// Anything that has to be fetched from elsewhere
    Remote,
}

impl SourceKind {
    pub fn is_remote(self) -> bool {
        self == SourceKind::Remote
    }
}

/// Classify an image source
pub fn classify(src: &str) -> SourceKind {
    if src.is_empty() {
        SourceKind::Empty
    } else if is_local(src) {
        SourceKind::Local
    } else {
        SourceKind::Remote
    }
}

/// Check whether a source is a bundled asset path
///
/// Bundled assets live under `/assets/`, or are relative (`./`, `../`), or are
/// root-absolute paths. Protocol-relative `//host/...` and `http(s)` URLs are
/// never local.
pub fn is_local(src: &str) -> bool {
    if src.is_empty() {
        return false;
    }

    if src.starts_with("http://") || src.starts_with("https://") {
        return false;
    }

    if src.starts_with("/assets/") {
        return true;
    }

    if src.starts_with("./") || src.starts_with("../") {
        return true;
    }

    src.starts_with('/') && !src.starts_with("//")
}

/// Everything before the first `?`
pub fn strip_query(src: &str) -> &str {
    match src.find('?') {
        Some(idx) => &src[..idx],
        None => src,
    }
}

/// Append a cache-busting query so a retried fetch bypasses caches
pub fn with_cache_buster(src: &str, attempt: u32, timestamp_ms: u64) -> String {
    let separator = if src.contains('?') { '&' } else { '?' };
    format!("{}{}_retry={}&t={}", src, separator, attempt, timestamp_ms)
}

/// Parse a remote source into an absolute URL
pub fn parse_remote(src: &str) -> AssetResult<Url> {
    match classify(src) {
        SourceKind::Empty => Err(AssetError::EmptySource),
        SourceKind::Local => Err(AssetError::NotRemote(src.to_string())),
        SourceKind::Remote => Ok(Url::parse(src)?),
    }
}
