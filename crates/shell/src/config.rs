//! Image loading configuration

use std::time::Duration;

use crate::fade::Easing;

/// How long an attempt may stay silent before it is abandoned
pub const LOAD_TIMEOUT: Duration = Duration::from_millis(8000);

/// Pause between a failed attempt and its retry
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Retries allowed after the first attempt
pub const MAX_RETRIES: u32 = 1;

/// Length of the fade-in once an image has loaded
pub const FADE_DURATION_MS: f32 = 500.0;

/// Image loading configuration
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub load_timeout: Duration,
    pub retry_delay: Duration,
    pub max_retries: u32,
    pub fade_duration_ms: f32,
    pub fade_easing: Easing,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            load_timeout: LOAD_TIMEOUT,
            retry_delay: RETRY_DELAY,
            max_retries: MAX_RETRIES,
            fade_duration_ms: FADE_DURATION_MS,
            fade_easing: Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
        }
    }
}
