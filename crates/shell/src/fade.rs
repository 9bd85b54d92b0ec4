//! Fade-in Transition
//!
//! Drives an image's opacity from 0 to 1 once it has loaded.

/// Easing curve for the fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

/// Apply easing function to a progress value (0.0 to 1.0)
pub fn apply_easing(t: f32, easing: Easing) -> f32 {
    match easing {
        Easing::Linear => t,
        Easing::Ease => cubic_bezier(t, 0.25, 0.1, 0.25, 1.0),
        Easing::EaseIn => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
        Easing::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
        Easing::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
        Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
    }
}

/// Calculate cubic bezier curve value at time t
/// Uses binary search to find the x parameter, then evaluates y
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut low = 0.0_f32;
    let mut high = 1.0_f32;

    // 16 iterations gives us good precision
    for _ in 0..16 {
        let mid = (low + high) / 2.0;
        if bezier_point(mid, x1, x2) < t {
            low = mid;
        } else {
            high = mid;
        }
    }

    bezier_point((low + high) / 2.0, y1, y2)
}

/// B(t) = 3(1-t)^2*t*p1 + 3(1-t)*t^2*p2 + t^3
fn bezier_point(t: f32, p1: f32, p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

/// Opacity fade from fully transparent to fully opaque
#[derive(Debug, Clone)]
pub struct FadeIn {
    /// Duration in milliseconds
    pub duration_ms: f32,
    /// Elapsed time in milliseconds
    pub elapsed_ms: f32,
    pub easing: Easing,
}

impl FadeIn {
    pub fn new(duration_ms: f32, easing: Easing) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Advance the fade by `delta_ms`
    pub fn tick(&mut self, delta_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + delta_ms.max(0.0)).min(self.duration_ms.max(0.0));
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Current opacity
    pub fn opacity(&self) -> f32 {
        apply_easing(self.progress(), self.easing)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Rewind to fully transparent
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        assert_eq!(apply_easing(0.0, Easing::Linear), 0.0);
        assert_eq!(apply_easing(0.5, Easing::Linear), 0.5);
        assert_eq!(apply_easing(1.0, Easing::Linear), 1.0);
    }

    #[test]
    fn test_curve_shapes() {
        assert!(apply_easing(0.5, Easing::Ease) > 0.5);
        assert!(apply_easing(0.5, Easing::EaseIn) < 0.5);
        assert!(apply_easing(0.5, Easing::EaseOut) > 0.5);
        let mid = apply_easing(0.5, Easing::EaseInOut);
        assert!((mid - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_fade_progress() {
        let mut fade = FadeIn::new(500.0, Easing::Linear);
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_complete());

        fade.tick(250.0);
        assert_eq!(fade.opacity(), 0.5);

        fade.tick(1000.0);
        assert_eq!(fade.opacity(), 1.0);
        assert!(fade.is_complete());

        fade.reset();
        assert_eq!(fade.opacity(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let fade = FadeIn::new(0.0, Easing::Ease);
        assert_eq!(fade.opacity(), 1.0);
        assert!(fade.is_complete());
    }

    #[test]
    fn test_negative_tick_ignored() {
        let mut fade = FadeIn::new(500.0, Easing::Linear);
        fade.tick(-100.0);
        assert_eq!(fade.elapsed_ms, 0.0);
    }
}
