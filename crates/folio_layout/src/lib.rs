//! Folio Layout
//!
//! Everything that turns scroll geometry into visual state:
//!
//! - [`boundary`]: top/bottom edge flags for a scroll container
//! - [`progress`]: scroll ratio and derived progress curves
//! - [`split`]: the moving colour boundary measured against an element
//! - [`cache`]: measured element geometry, refreshed on layout changes only
//! - [`smooth`]: eased mouse-wheel scrolling, last call wins
//! - [`scrollable`]: the reusable page behaviour combining all of the above
//!
//! # Example
//!
//! ```rust
//! use folio_layout::prelude::*;
//! use folio_platform::{Rect, ScrollMetrics};
//!
//! let metrics = ScrollMetrics::new(300.0, 2000.0, 800.0);
//! let progress = compute_progress(&metrics);
//! assert_eq!(progress, 0.25);
//!
//! let text = Rect::new(0.0, 200.0, 1200.0, 400.0);
//! assert_eq!(compute_split(400.0, &text).unwrap(), 50.0);
//! ```

pub mod boundary;
pub mod cache;
pub mod container;
pub mod error;
pub mod progress;
pub mod scrollable;
pub mod smooth;
pub mod split;

pub use boundary::BoundaryFlags;
pub use cache::{ElementKey, LayoutCache};
pub use container::ScrollContainer;
pub use error::{LayoutError, Result};
pub use progress::{compute_progress, overlay_opacity, remap_range, segment_progress};
pub use scrollable::{PageSignal, PageSignals, PageVisual, ScrollablePage, WheelReaction};
pub use smooth::SmoothScroller;
pub use split::{compute_split, SplitKind, SplitState};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::boundary::BoundaryFlags;
    pub use crate::cache::{ElementKey, LayoutCache};
    pub use crate::container::ScrollContainer;
    pub use crate::error::{LayoutError, Result};
    pub use crate::progress::{compute_progress, overlay_opacity, remap_range, segment_progress};
    pub use crate::scrollable::{PageSignal, PageSignals, PageVisual, ScrollablePage, WheelReaction};
    pub use crate::smooth::SmoothScroller;
    pub use crate::split::{compute_split, SplitKind, SplitState};
}
