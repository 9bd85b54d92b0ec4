//! Image Loading
//!
//! Fetches and decodes the bytes behind an image source: bundled assets
//! from disk, remote images over HTTP.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use folio_assets::{classify, parse_remote, strip_query, AssetError, SourceKind};
use folio_net::{HttpClient, NetError};
use image::GenericImageView;
use log::debug;
use thiserror::Error;
use url::Url;

/// Boxed future returned by fetchers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Why a single load attempt failed
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] NetError),

    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("Decode failed: {0}")]
    DecodeFailed(String),

    #[error("Data URLs not supported")]
    DataUrlNotSupported,

    #[error("File read error: {0}")]
    FileReadError(String),
}

impl From<AssetError> for ImageLoadError {
    fn from(err: AssetError) -> Self {
        ImageLoadError::InvalidUrl(err.to_string())
    }
}

/// Decoded image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA pixels, row-major
    pub data: Vec<u8>,
}

/// Performs the fetch behind [`crate::Command::Fetch`]
pub trait ImageFetcher {
    fn fetch<'a>(&'a self, src: &str) -> BoxFuture<'a, Result<DecodedImage, ImageLoadError>>;
}

/// Fetcher for bundled assets and remote images
#[derive(Clone)]
pub struct AssetFetcher {
    client: HttpClient,
    /// Directory bundled assets are served from
    asset_root: PathBuf,
    /// Page URL that protocol-relative sources resolve against
    base_url: Option<Url>,
}

impl AssetFetcher {
    pub fn new(client: HttpClient, asset_root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            asset_root: asset_root.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Load and decode the image behind `src`
    pub async fn load(&self, src: &str) -> Result<DecodedImage, ImageLoadError> {
        match classify(src) {
            SourceKind::Empty => Err(ImageLoadError::InvalidUrl("Empty src".to_string())),
            SourceKind::Local => load_image_from_file(&self.local_path(src)).await,
            SourceKind::Remote => {
                if src.starts_with("data:") {
                    return Err(ImageLoadError::DataUrlNotSupported);
                }
                let url = self.resolve_remote(src)?;
                self.load_remote(&url).await
            }
        }
    }

    /// Path of a bundled asset on disk, ignoring any query
    fn local_path(&self, src: &str) -> PathBuf {
        self.asset_root.join(strip_query(src).trim_start_matches('/'))
    }

    /// Resolve a remote source to an absolute http(s) URL
    fn resolve_remote(&self, src: &str) -> Result<Url, ImageLoadError> {
        let url = match (&self.base_url, src.starts_with("//")) {
            (Some(base), true) => base
                .join(src)
                .map_err(|e| ImageLoadError::InvalidUrl(e.to_string()))?,
            _ => parse_remote(src)?,
        };

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ImageLoadError::InvalidUrl(format!(
                "Unsupported scheme '{}' in {}",
                scheme, src
            ))),
        }
    }

    async fn load_remote(&self, url: &Url) -> Result<DecodedImage, ImageLoadError> {
        debug!("Fetching image: {}", url);

        let response = self.client.get(url).await?;
        if !response.is_success() {
            let status = response.status;
            return Err(ImageLoadError::FetchFailed(NetError::HttpError { status }));
        }
        if !response.is_image() {
            let content_type = response.content_type().unwrap_or_default().to_string();
            return Err(ImageLoadError::NotAnImage(content_type));
        }

        let bytes = response.into_body()?;
        decode_image(&bytes)
    }
}

impl ImageFetcher for AssetFetcher {
    fn fetch<'a>(&'a self, src: &str) -> BoxFuture<'a, Result<DecodedImage, ImageLoadError>> {
        let src = src.to_string();
        Box::pin(async move { self.load(&src).await })
    }
}

/// Load image from a file on disk
async fn load_image_from_file(path: &Path) -> Result<DecodedImage, ImageLoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ImageLoadError::FileReadError(format!("{}: {}", path.display(), e)))?;

    decode_image(&bytes)
}

/// Decode image bytes to RGBA pixel data
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageLoadError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ImageLoadError::DecodeFailed(e.to_string()))?;

    let (width, height) = img.dimensions();
    let data = img.to_rgba8().into_raw();

    debug!("Decoded image: {}x{}", width, height);

    Ok(DecodedImage {
        width,
        height,
        data,
    })
}
