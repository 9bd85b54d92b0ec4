//! Folio Image Shell
//!
//! The image component used across the portfolio page: a load controller
//! with timeout and retry, its render model, and a tokio driver that runs it
//! against real sources.

mod config;
mod controller;
mod driver;
mod fade;
mod gallery;
mod image_loader;
mod view;

pub use config::{LoaderConfig, FADE_DURATION_MS, LOAD_TIMEOUT, MAX_RETRIES, RETRY_DELAY};
pub use controller::{
    Clock, Command, Generation, ImageLoadController, Phase, SharedClock, SystemClock, Timer,
    TimerKind,
};
pub use driver::{drive, LoadReport};
pub use fade::{apply_easing, Easing, FadeIn};
pub use gallery::{Gallery, AUTO_ADVANCE};
pub use image_loader::{
    decode_image, AssetFetcher, BoxFuture, DecodedImage, ImageFetcher, ImageLoadError,
};
pub use view::{
    placeholder_gradient, FallbackIcon, FallbackPanel, ImageElement, ImageProps, ImageView,
    DEFAULT_FALLBACK_TEXT,
};
