//! Single-shot timers and debounce gates
//!
//! Both are plain deadline records polled with the current frame time.
//! Re-arming a timer replaces its deadline, so a superseded callback can
//! never fire against state that has already moved on.

use std::time::{Duration, Instant};

/// A single-shot deadline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer to expire `after` from `now`
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Minimum spacing between accepted events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether an event at `now` falls outside the window of the last accepted one
    pub fn is_open(&self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        }
    }

    /// Record an accepted event
    pub fn accept(&mut self, now: Instant) {
        self.last_accepted = Some(now);
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
