//! Folio Asset Resolution
//!
//! Classifies image sources and rewrites sharing links into URLs an image
//! element can render directly.

mod drive;
mod error;
mod key;
mod source;

pub use drive::{
    extract_file_id, is_drive_url, to_download_url, to_view_url, DRIVE_HOST, DRIVE_VIEW_ENDPOINT,
};
pub use error::{AssetError, AssetResult};
pub use key::normalize_key;
pub use source::{classify, is_local, parse_remote, strip_query, with_cache_buster, SourceKind};
