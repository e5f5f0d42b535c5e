//! Navigation menu state
//!
//! While the menu is open, or still playing its closing animation, the page
//! stack is scroll-locked and wheel input is dropped.

use std::time::{Duration, Instant};

use folio_animation::Timer;
use folio_core::StateTransitions;
use serde::Serialize;
use tracing::trace;

/// Menu events
pub mod menu_events {
    /// Visitor opened the menu
    pub const OPEN: u32 = 20100;
    /// Visitor dismissed the menu; the closing animation starts
    pub const CLOSE: u32 = 20101;
    /// Closing animation finished
    pub const CLOSED: u32 = 20102;
}

/// Visible state of the navigation menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    Closing,
}

impl MenuState {
    /// Whether the page stack ignores wheel input
    pub fn locks_scroll(&self) -> bool {
        !matches!(self, MenuState::Closed)
    }
}

impl StateTransitions for MenuState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use menu_events::*;

        match (self, event) {
            (MenuState::Closed, OPEN) => Some(MenuState::Open),
            // Re-opening mid-close cancels the close
            (MenuState::Closing, OPEN) => Some(MenuState::Open),
            (MenuState::Open, CLOSE) => Some(MenuState::Closing),
            (MenuState::Closing, CLOSED) => Some(MenuState::Closed),
            _ => None,
        }
    }
}

/// Menu state plus its closing timer
#[derive(Clone, Debug)]
pub struct Menu {
    state: MenuState,
    close_timer: Timer,
    close_duration: Duration,
}

impl Menu {
    pub fn new(close_duration: Duration) -> Self {
        Self {
            state: MenuState::Closed,
            close_timer: Timer::new(),
            close_duration,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn locks_scroll(&self) -> bool {
        self.state.locks_scroll()
    }

    /// Returns true if the state changed
    pub fn open(&mut self) -> bool {
        if self.state.apply(menu_events::OPEN) {
            self.close_timer.cancel();
            trace!("menu opened");
            return true;
        }
        false
    }

    /// Start the closing animation; returns true if the state changed
    pub fn close(&mut self, now: Instant) -> bool {
        if self.state.apply(menu_events::CLOSE) {
            self.close_timer.arm(now, self.close_duration);
            trace!("menu closing");
            return true;
        }
        false
    }

    /// Menu button pressed; a menu that is still closing keeps closing
    pub fn toggle(&mut self, now: Instant) -> bool {
        match self.state {
            MenuState::Open | MenuState::Closing => self.close(now),
            MenuState::Closed => self.open(),
        }
    }

    /// Returns true when the closing animation finished on this tick
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.close_timer.poll(now) {
            return self.state.apply(menu_events::CLOSED);
        }
        false
    }

    /// Snap closed and drop the pending timer
    pub fn teardown(&mut self) {
        self.close_timer.cancel();
        self.state = MenuState::Closed;
    }
}
