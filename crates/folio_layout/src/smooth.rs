//! Eased mouse-wheel scrolling
//!
//! Each container owns one [`SmoothScroller`]. Starting a new scroll drops
//! the in-flight tween, so there is at most one interpolation per container
//! and the newest target always wins.

use std::time::{Duration, Instant};

use folio_animation::{Easing, Tween};
use tracing::trace;

/// Single-slot scroll animator
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    tween: Option<Tween>,
    duration: Duration,
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

impl SmoothScroller {
    pub fn new(duration: Duration) -> Self {
        Self {
            tween: None,
            duration,
        }
    }

    /// Start scrolling from `current` to `target`, replacing any running scroll
    pub fn scroll_to(&mut self, current: f32, target: f32, now: Instant) {
        if let Some(previous) = self.tween.as_ref() {
            trace!(
                previous_target = previous.target(),
                target,
                "smooth scroll superseded"
            );
        }
        self.tween = Some(Tween::new(
            current,
            target,
            now,
            self.duration,
            Easing::EaseOutQuad,
        ));
    }

    /// Offset for this frame, or `None` when idle
    ///
    /// The final frame returns the exact target and clears the animation.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        let tween = self.tween?;
        let value = tween.sample(now);
        if tween.is_done(now) {
            self.tween = None;
        }
        Some(value)
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Target of the running scroll
    pub fn target(&self) -> Option<f32> {
        self.tween.map(|t| t.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_scroll_runs_to_target() {
        let t0 = Instant::now();
        let mut s = SmoothScroller::default();
        s.scroll_to(0.0, 216.0, t0);
        let mid = s.frame(t0 + ms(200)).unwrap();
        assert!((mid - 162.0).abs() < 1e-3, "ease-out: 216 * 0.75");
        assert_eq!(s.frame(t0 + ms(400)), Some(216.0));
        assert!(!s.is_animating());
        assert_eq!(s.frame(t0 + ms(416)), None);
    }

    #[test]
    fn test_second_call_wins() {
        let t0 = Instant::now();
        let mut s = SmoothScroller::default();
        s.scroll_to(0.0, 200.0, t0);
        let at_100 = s.frame(t0 + ms(100)).unwrap();
        s.scroll_to(at_100, 600.0, t0 + ms(100));
        assert_eq!(s.target(), Some(600.0));

        let mut last = at_100;
        let mut frame = t0 + ms(100);
        while let Some(value) = s.frame(frame) {
            last = value;
            frame += ms(16);
        }
        assert_eq!(last, 600.0);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut s = SmoothScroller::default();
        s.scroll_to(0.0, 100.0, t0);
        s.cancel();
        assert_eq!(s.frame(t0 + ms(50)), None);
    }
}
