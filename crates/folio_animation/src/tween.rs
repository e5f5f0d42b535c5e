//! Time-boxed tweens
//!
//! A tween interpolates a scalar from `from` to `to` over a fixed duration.
//! Retargeting mid-flight restarts from the currently sampled value, so the
//! subject never jumps and exactly one interpolation stays alive.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// A fixed-duration scalar interpolation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Normalized elapsed time clamped to `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Value at `now`
    pub fn sample(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.apply(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Restart toward a new target from wherever the tween is right now
    pub fn retarget(&mut self, now: Instant, to: f32, duration: Duration) {
        let current = self.sample(now);
        *self = Self::new(current, to, now, duration, self.easing);
    }
}
