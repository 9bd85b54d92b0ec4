//! Render model for the image component
//!
//! An image renders as exactly one of a spinner, a fallback panel, or the
//! image itself.

/// Text shown on the fallback panel when the caller gives none
pub const DEFAULT_FALLBACK_TEXT: &str = "Image unavailable";

/// Caller-supplied inputs of an image component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProps {
    /// Image source, possibly empty
    pub source: String,
    pub alt_text: String,
    pub fallback_text: String,
    pub css_class: String,
}

impl ImageProps {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
            css_class: String::new(),
        }
    }

    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }
}

/// Icon drawn on the fallback panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackIcon {
    ImageOff,
}

/// Panel shown in place of an image that could not be loaded
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackPanel {
    pub icon: FallbackIcon,
    pub text: String,
    pub class: String,
    /// CSS background derived from the alt text
    pub background: String,
}

impl FallbackPanel {
    pub fn new(props: &ImageProps) -> Self {
        Self {
            icon: FallbackIcon::ImageOff,
            text: props.fallback_text.clone(),
            class: props.css_class.clone(),
            background: placeholder_gradient(&props.alt_text),
        }
    }
}

/// The image element itself
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub src: String,
    pub alt: String,
    pub class: String,
    /// Defer fetching until near the viewport
    pub lazy: bool,
    pub opacity: f32,
}

impl ImageElement {
    pub fn new(props: &ImageProps, src: &str, opacity: f32) -> Self {
        Self {
            src: src.to_string(),
            alt: props.alt_text.clone(),
            class: props.css_class.clone(),
            lazy: true,
            opacity,
        }
    }
}

/// What an image component renders right now
#[derive(Debug, Clone, PartialEq)]
pub enum ImageView {
    /// Spinner overlay; the element stays mounted underneath, transparent,
    /// so it can still report load and error
    Spinner { image: ImageElement },
    Fallback(FallbackPanel),
    Image(ImageElement),
}

impl ImageView {
    pub fn is_spinner(&self) -> bool {
        matches!(self, ImageView::Spinner { .. })
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageView::Fallback(_))
    }

    /// The mounted image element, if any
    pub fn element(&self) -> Option<&ImageElement> {
        match self {
            ImageView::Spinner { image } | ImageView::Image(image) => Some(image),
            ImageView::Fallback(_) => None,
        }
    }
}

/// Gradient background seeded by the alt text
///
/// The hue comes from a 31-multiplier rolling hash over UTF-16 units, with
/// the shift wrapping at 32 bits, so the same alt text always gets the same
/// colors.
pub fn placeholder_gradient(alt: &str) -> String {
    let hash = alt.encode_utf16().fold(0i64, |acc, unit| {
        let shifted = (acc as i32).wrapping_shl(5) as i64;
        unit as i64 + shifted - acc
    });
    let hue = (hash % 360).abs();
    format!(
        "linear-gradient(135deg, hsl({}, 70%, 20%), hsl({}, 70%, 15%))",
        hue,
        (hue + 60) % 360
    )
}
