//! Google Drive sharing links
//!
//! Drive hands out sharing links in a few shapes, none of which an image
//! element can render. Each carries a file id that maps onto the `uc` endpoint.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Host serving Drive sharing links
pub const DRIVE_HOST: &str = "drive.google.com";

/// Renderable endpoint, completed by appending the file id
pub const DRIVE_VIEW_ENDPOINT: &str = "https://drive.google.com/uc?export=view&id=";

/// File id shapes, tried in order
static FILE_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // ?id=FILE_ID or &id=FILE_ID
        Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").unwrap(),
        // /d/FILE_ID
        Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap(),
        // /file/d/FILE_ID
        Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").unwrap(),
    ]
});

/// Extract the file id from a sharing link
pub fn extract_file_id(url: &str) -> Option<&str> {
    if url.is_empty() {
        return None;
    }

    FILE_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
}

/// Check whether a source is a Drive link with a recoverable file id
pub fn is_drive_url(src: &str) -> bool {
    let on_drive = Url::parse(src)
        .map(|url| url.host_str() == Some(DRIVE_HOST))
        .unwrap_or(false);

    on_drive && extract_file_id(src).is_some()
}

/// Rewrite a sharing link into the renderable view URL
///
/// Returns the input unchanged when it is already in view form or when no
/// file id can be found; callers compare against the input to tell whether
/// a rewrite happened.
pub fn to_view_url(url: &str) -> String {
    if url.contains("uc?export=view") && url.contains("id=") {
        return url.to_string();
    }

    match extract_file_id(url) {
        Some(id) => format!("{}{}", DRIVE_VIEW_ENDPOINT, id),
        None => url.to_string(),
    }
}

/// Rewrite a sharing link into the URL used when retrying a failed load
///
/// This resolves to the same `uc?export=view` endpoint as [`to_view_url`].
/// The `export=download` variant serves the file as an attachment, which an
/// image element cannot render, so a retry only recovers transient failures.
pub fn to_download_url(url: &str) -> String {
    match extract_file_id(url) {
        Some(id) => format!("{}{}", DRIVE_VIEW_ENDPOINT, id),
        None => url.to_string(),
    }
}
