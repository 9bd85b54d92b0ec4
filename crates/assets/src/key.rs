//! Normalized keys for "same resource" comparisons

use url::Url;

use crate::drive::{extract_file_id, DRIVE_HOST, DRIVE_VIEW_ENDPOINT};
use crate::source::{is_local, strip_query};

/// Reduce a source to the key used to decide whether two sources are the
/// same resource
///
/// Query strings never distinguish resources, except that a Drive link is
/// identified by its file id wherever the id appears. Never fails: anything
/// that does not parse as a URL falls back to query stripping.
pub fn normalize_key(src: &str) -> String {
    if src.is_empty() || is_local(src) {
        return strip_query(src).to_string();
    }

    let url = match Url::parse(src) {
        Ok(url) => url,
        Err(_) => return strip_query(src).to_string(),
    };

    if url.host_str() == Some(DRIVE_HOST) {
        if let Some(id) = extract_file_id(src) {
            return format!("{}{}", DRIVE_VIEW_ENDPOINT, id);
        }
    }

    strip_query(src).to_string()
}
