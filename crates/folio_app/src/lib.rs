//! Folio Application
//!
//! The page controller for a full-viewport, vertically paged site: one
//! screen-sized page at a time, wheel-driven navigation with a slide
//! transition, scrollable pages that hand off at their edges, a colour
//! split that follows scroll progress, and an indicator whose dots adapt to
//! whatever background sits behind them.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_app::prelude::*;
//!
//! let mut controller = PageController::new(SiteConfig::default(), Size::new(1280.0, 800.0))?;
//! let t0 = Instant::now();
//!
//! // One mouse-wheel notch on a static page slides to the next page
//! let response = controller.on_wheel(&WheelEvent::pixels(120.0), t0);
//! assert!(response.prevent_default);
//! assert_eq!(controller.current_page(), 1);
//!
//! controller.tick(t0 + Duration::from_millis(800));
//! assert_eq!(controller.stack_offset(t0 + Duration::from_millis(800)), -100.0);
//!
//! for event in controller.drain_events() {
//!     println!("{}", event.name());
//! }
//! # Ok::<(), folio_app::FolioError>(())
//! ```

mod controller;
mod error;
mod events;
pub mod indicator;
mod menu;
mod transform;


pub use controller::{PageController, WheelResponse};
pub use error::{FolioError, Result};
pub use events::ControllerEvent;
pub use indicator::{CapsuleFill, DotView, DotViews, FillInk};
pub use menu::{menu_events, Menu, MenuState};
pub use transform::{page_offset, StackTransform};

// Re-export the building blocks for hosts
pub use folio_core::{
    EntryDirection, NavigationOutcome, PageIndex, ScrollDirection, SiteConfig, UnlockAction,
};
pub use folio_layout::{ElementKey, SplitKind, SplitState};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::controller::{PageController, WheelResponse};
    pub use crate::error::{FolioError, Result};
    pub use crate::events::ControllerEvent;
    pub use crate::indicator::{CapsuleFill, DotView, FillInk};
    pub use crate::menu::MenuState;

    pub use folio_core::{
        EntryDirection, NavigationOutcome, PageIndex, ScrollDirection, SiteConfig, UnlockAction,
    };
    pub use folio_layout::{ElementKey, SplitKind, SplitState};
    pub use folio_platform::{DeltaMode, InputEvent, Rect, ScrollMetrics, Size, WheelEvent};
}
