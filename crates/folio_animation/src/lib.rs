//! Folio Animation System
//!
//! Time-boxed interpolation and timers for scroll-driven page orchestration.
//!
//! # Features
//!
//! - **Easing Curves**: ease-out-quadratic for wheel scrolling, CSS-style
//!   cubic Béziers for page slides
//! - **Tweens**: fixed-duration interpolations sampled against frame time
//! - **Last Call Wins**: retargeting replaces the in-flight tween, never queues
//! - **Timers**: single-shot deadlines and debounce gates driven by `Instant`
//!
//! Time is always passed in explicitly. Nothing in this crate reads the
//! clock or spawns threads, so hosts can drive it from `requestAnimationFrame`
//! and tests can drive it from a fixed origin.

pub mod easing;
pub mod timer;
pub mod tween;

pub use easing::{CubicBezier, Easing};
pub use timer::{Debounce, Timer};
pub use tween::Tween;
