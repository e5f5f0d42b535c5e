//! Folio Platform Abstraction Layer
//!
//! Host-agnostic input and geometry types. A rendering host (a browser
//! bridge, a native window, or a test harness) translates its own events
//! into these types before handing them to the page controller.
//!
//! # Example
//!
//! ```rust
//! use folio_platform::{DeltaMode, WheelEvent};
//!
//! let notch = WheelEvent::new(0.0, 120.0, DeltaMode::Pixel);
//! assert_eq!(notch.normalized_delta_y(16.0, 900.0), 120.0);
//! ```

mod error;
mod geometry;
mod input;

pub use error::{PlatformError, Result};
pub use geometry::{Point, Rect, Size};
pub use input::{DeltaMode, InputEvent, ScrollMetrics, WheelEvent};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::input::{DeltaMode, InputEvent, ScrollMetrics, WheelEvent};
}
