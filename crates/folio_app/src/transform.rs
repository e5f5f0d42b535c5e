//! Vertical offset of the page stack
//!
//! The stack sits at `-current * 100` viewport heights. Page changes slide
//! to the new offset on the standard curve; anything else snaps.

use std::time::{Duration, Instant};

use folio_animation::{Easing, Tween};
use folio_core::PageIndex;

/// Stack offset, in `vh`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackTransform {
    offset_vh: f32,
    slide: Option<Tween>,
}

impl Default for StackTransform {
    fn default() -> Self {
        Self::at(0)
    }
}

/// Resting offset for `page`
pub fn page_offset(page: PageIndex) -> f32 {
    -(page as f32) * 100.0
}

impl StackTransform {
    /// Resting on `page`
    pub fn at(page: PageIndex) -> Self {
        Self {
            offset_vh: page_offset(page),
            slide: None,
        }
    }

    /// Offset the stack is heading to
    pub fn target(&self) -> f32 {
        self.offset_vh
    }

    pub fn is_sliding(&self, now: Instant) -> bool {
        self.slide.is_some_and(|slide| !slide.is_done(now))
    }

    /// Slide to `page` over `duration`, starting from wherever we are
    pub fn slide_to(&mut self, page: PageIndex, now: Instant, duration: Duration) {
        let from = self.sample(now);
        self.offset_vh = page_offset(page);
        self.slide = Some(Tween::new(
            from,
            self.offset_vh,
            now,
            duration,
            Easing::standard(),
        ));
    }

    /// Jump to `page` without animating
    pub fn snap_to(&mut self, page: PageIndex) {
        *self = Self::at(page);
    }

    /// Offset at `now`
    pub fn sample(&self, now: Instant) -> f32 {
        match self.slide {
            Some(slide) => slide.sample(now),
            None => self.offset_vh,
        }
    }

    /// Offset in pixels for a viewport of `viewport_height`
    pub fn sample_px(&self, now: Instant, viewport_height: f32) -> f32 {
        self.sample(now) / 100.0 * viewport_height
    }
}
