//! Image gallery carousel
//!
//! Cycles through a fixed list of slides, advancing on its own at a fixed
//! interval. Each slide change mounts a fresh image component.

use std::time::Duration;

use crate::view::ImageProps;

/// Default auto-advance interval
pub const AUTO_ADVANCE: Duration = Duration::from_millis(4000);

/// Carousel over a list of images
#[derive(Debug, Clone)]
pub struct Gallery {
    slides: Vec<ImageProps>,
    index: usize,
    interval: Duration,
    elapsed: Duration,
}

impl Gallery {
    pub fn new(slides: Vec<ImageProps>) -> Self {
        Self::with_interval(slides, AUTO_ADVANCE)
    }

    pub fn with_interval(slides: Vec<ImageProps>, interval: Duration) -> Self {
        Self {
            slides,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The slide on screen, if any
    pub fn current(&self) -> Option<&ImageProps> {
        self.slides.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + self.slides.len() - 1) % self.slides.len();
        }
    }

    /// Jump to a slide; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.slides.len() {
            self.index = index;
        }
    }

    /// Advance the auto-rotation clock
    ///
    /// Returns true if the slide changed. Manual moves do not restart the
    /// clock.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.slides.is_empty() || self.interval.is_zero() {
            return false;
        }

        self.elapsed += delta;
        let mut changed = false;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.next();
            changed = true;
        }
        changed
    }
}
