//! Per-container scroll record
//!
//! Holds the latest metrics of one scroll container together with the
//! boundary flags derived from them and the container's smooth scroller.
//! The record is owned by the page behaviour, never stashed on the host
//! element.

use std::time::{Duration, Instant};

use folio_platform::ScrollMetrics;

use crate::boundary::BoundaryFlags;
use crate::progress::compute_progress;
use crate::smooth::SmoothScroller;

/// Scroll state of one container
#[derive(Clone, Debug)]
pub struct ScrollContainer {
    metrics: ScrollMetrics,
    flags: BoundaryFlags,
    scroller: SmoothScroller,
}

impl Default for ScrollContainer {
    fn default() -> Self {
        Self::new(ScrollMetrics::default(), Duration::from_millis(400))
    }
}

impl ScrollContainer {
    pub fn new(metrics: ScrollMetrics, smooth_duration: Duration) -> Self {
        Self {
            flags: BoundaryFlags::from_metrics(&metrics),
            metrics,
            scroller: SmoothScroller::new(smooth_duration),
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Flags as of the last scroll event
    pub fn flags(&self) -> BoundaryFlags {
        self.flags
    }

    pub fn scroll_top(&self) -> f32 {
        self.metrics.scroll_top
    }

    pub fn max_scroll(&self) -> f32 {
        self.metrics.max_scroll()
    }

    pub fn progress(&self) -> f32 {
        compute_progress(&self.metrics)
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    pub fn animation_target(&self) -> Option<f32> {
        self.scroller.target()
    }

    /// Host reported a scroll (native or after layout change)
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> BoundaryFlags {
        self.metrics = metrics;
        self.flags = BoundaryFlags::from_metrics(&metrics);
        self.flags
    }

    /// Start an eased scroll by `displacement`, clamped to the scroll range
    ///
    /// Returns the clamped target.
    pub fn smooth_scroll_by(&mut self, displacement: f32, now: Instant) -> f32 {
        let target = (self.metrics.scroll_top + displacement).clamp(0.0, self.max_scroll());
        self.smooth_scroll_to(target, now);
        target
    }

    /// Start an eased scroll to `target`, replacing any running one
    pub fn smooth_scroll_to(&mut self, target: f32, now: Instant) {
        let target = target.clamp(0.0, self.max_scroll());
        self.scroller.scroll_to(self.metrics.scroll_top, target, now);
    }

    /// Advance the smooth scroll; returns the new offset if one was applied
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        let offset = self.scroller.frame(now)?;
        let metrics = self.metrics.with_scroll_top(offset);
        self.on_scroll(metrics);
        Some(metrics.scroll_top)
    }

    /// Jump to the top and stop animating
    pub fn reset(&mut self) {
        self.scroller.cancel();
        let metrics = self.metrics.with_scroll_top(0.0);
        self.on_scroll(metrics);
    }

    pub fn cancel_animation(&mut self) {
        self.scroller.cancel();
    }
}
