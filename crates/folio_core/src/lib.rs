//! Folio Core
//!
//! Foundational pieces of the page orchestration engine:
//!
//! - **Wheel Classification**: mouse wheel vs touchpad heuristics
//! - **Navigation**: the `Idle`/`Transitioning` page state machine with the
//!   one-way unlock gate
//! - **Site Configuration**: page kinds, backdrops and timing tunables
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_core::{Navigator, SiteConfig, UnlockAction};
//!
//! let config = SiteConfig::default();
//! let mut nav = Navigator::new(&config);
//! let t0 = Instant::now();
//!
//! nav.change_page(1, t0);
//! assert_eq!(nav.current_page(), 1);
//!
//! // Locked: page 2 is out of reach until the visitor answers on page 1
//! nav.tick(t0 + Duration::from_millis(800));
//! assert!(!nav.change_page(2, t0 + Duration::from_millis(900)).is_changed());
//!
//! nav.unlock(UnlockAction::Nod);
//! assert!(nav.change_page(2, t0 + Duration::from_millis(900)).is_changed());
//! ```

pub mod config;
pub mod direction;
pub mod error;
pub mod fsm;
pub mod navigation;
pub mod page;
pub mod wheel;

pub use config::{SiteConfig, TimingConfig, WheelConfig};
pub use direction::{EntryDirection, ScrollDirection};
pub use error::{ConfigError, Result};
pub use fsm::{nav_events, NavPhase, StateTransitions};
pub use navigation::{
    IgnoreReason, NavigationOutcome, NavigationState, Navigator, PageChange, PageIndex,
    UnlockAction,
};
pub use page::{Backdrop, PageKind, PageSpec, SplitMapping, SplitSpec, StrikeWindow, Tone};
pub use wheel::{WheelClassifier, WheelSource};
