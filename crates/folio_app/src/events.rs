//! Notifications for the host
//!
//! The controller queues these as it processes input and ticks. Hosts drain
//! the queue once per frame and apply the changes to their view.

use serde::Serialize;

use folio_core::{EntryDirection, PageIndex, UnlockAction};

use crate::menu::MenuState;

/// Something the host should react to
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ControllerEvent {
    /// A slide to `to` started
    PageChanged {
        from: PageIndex,
        to: PageIndex,
        entry: EntryDirection,
    },
    /// The slide ended and navigation is open again
    TransitionFinished { page: PageIndex },
    /// Extended pages became reachable
    Unlocked { action: UnlockAction },
    /// Scroll progress of a page changed, `0..=1`
    Progress { page: PageIndex, progress: f32 },
    /// Colour split of a page's content changed, `0..=100`
    Split { page: PageIndex, split_percent: f32 },
    /// Navigation menu moved to a new state
    Menu { state: MenuState },
}

impl ControllerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerEvent::PageChanged { .. } => "page_changed",
            ControllerEvent::TransitionFinished { .. } => "transition_finished",
            ControllerEvent::Unlocked { .. } => "unlocked",
            ControllerEvent::Progress { .. } => "progress",
            ControllerEvent::Split { .. } => "split",
            ControllerEvent::Menu { .. } => "menu",
        }
    }
}
