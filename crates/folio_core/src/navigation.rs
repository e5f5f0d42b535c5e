//! Page navigation state machine
//!
//! The [`Navigator`] is the only owner of the current page. Everything else
//! (pages, indicator, menu) reads it or asks it to move; nothing writes it
//! directly.
//!
//! Guard violations (same page, mid-transition, locked or out of range) are
//! silent no-ops. The returned [`NavigationOutcome`] tells the caller why,
//! but the state is untouched either way.

use std::time::{Duration, Instant};

use folio_animation::Timer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::SiteConfig;
use crate::direction::{EntryDirection, ScrollDirection};
use crate::fsm::{nav_events, NavPhase, StateTransitions};

/// Index of a page in the stack
pub type PageIndex = usize;

/// The two answers the greeting page recognises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockAction {
    Nod,
    Shake,
}

/// Snapshot of navigation state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: PageIndex,
    /// Page we came from; only used to pick entry animations
    pub previous_page: Option<PageIndex>,
    pub phase: NavPhase,
    pub has_unlocked_extended_pages: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: 0,
            previous_page: None,
            phase: NavPhase::Idle,
            has_unlocked_extended_pages: false,
        }
    }
}

impl NavigationState {
    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }
}

/// An accepted page change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    pub from: PageIndex,
    pub to: PageIndex,
}

/// Why a navigation request was dropped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    SamePage,
    Transitioning,
    Locked,
    OutOfRange,
}

/// Result of a navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Changed(PageChange),
    Ignored(IgnoreReason),
}

impl NavigationOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, NavigationOutcome::Changed(_))
    }

    pub fn change(&self) -> Option<PageChange> {
        match self {
            NavigationOutcome::Changed(change) => Some(*change),
            NavigationOutcome::Ignored(_) => None,
        }
    }
}

/// Owner of the current page index and the unlock gate
#[derive(Clone, Debug)]
pub struct Navigator {
    state: NavigationState,
    page_count: usize,
    unlock_gate: PageIndex,
    transition: Duration,
    timer: Timer,
}

impl Navigator {
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_limits(
            config.page_count(),
            config.unlock_gate,
            config.timing.transition(),
        )
    }

    pub fn with_limits(page_count: usize, unlock_gate: PageIndex, transition: Duration) -> Self {
        Self {
            state: NavigationState::default(),
            page_count: page_count.max(1),
            unlock_gate: unlock_gate.clamp(1, page_count.max(1)),
            transition,
            timer: Timer::new(),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_page(&self) -> PageIndex {
        self.state.current_page
    }

    pub fn previous_page(&self) -> Option<PageIndex> {
        self.state.previous_page
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_unlocked(&self) -> bool {
        self.state.has_unlocked_extended_pages
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn unlock_gate(&self) -> PageIndex {
        self.unlock_gate
    }

    pub fn transition_duration(&self) -> Duration {
        self.transition
    }

    /// When the running slide ends, if one is running
    pub fn transition_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Pages the visitor can currently reach (and the indicator shows)
    pub fn accessible_page_count(&self) -> usize {
        if self.state.has_unlocked_extended_pages {
            self.page_count
        } else {
            self.unlock_gate
        }
    }

    /// Direction the current page was entered from
    pub fn entry_direction(&self) -> EntryDirection {
        EntryDirection::between(self.state.previous_page, self.state.current_page)
    }

    /// Move to `target`, starting the slide transition
    ///
    /// A slide whose deadline has passed by `now` counts as finished even
    /// if [`tick`](Self::tick) was never called for it.
    pub fn change_page(&mut self, target: PageIndex, now: Instant) -> NavigationOutcome {
        self.tick(now);
        let reason = if target == self.state.current_page {
            Some(IgnoreReason::SamePage)
        } else if self.state.is_transitioning() {
            Some(IgnoreReason::Transitioning)
        } else if target >= self.page_count {
            Some(IgnoreReason::OutOfRange)
        } else if target >= self.unlock_gate && !self.state.has_unlocked_extended_pages {
            Some(IgnoreReason::Locked)
        } else {
            None
        };

        if let Some(reason) = reason {
            trace!(target, ?reason, "navigation request ignored");
            return NavigationOutcome::Ignored(reason);
        }

        let change = PageChange {
            from: self.state.current_page,
            to: target,
        };
        self.state.previous_page = Some(change.from);
        self.state.current_page = target;
        self.state.phase.apply(nav_events::TRANSITION_START);
        self.timer.arm(now, self.transition);

        debug!(from = change.from, to = change.to, "page change");
        NavigationOutcome::Changed(change)
    }

    /// Move one page in `direction`, as a boundary scroll does
    pub fn step(&mut self, direction: ScrollDirection, now: Instant) -> NavigationOutcome {
        self.tick(now);
        if self.state.is_transitioning() {
            trace!(direction = direction.as_str(), "boundary scroll during transition");
            return NavigationOutcome::Ignored(IgnoreReason::Transitioning);
        }

        let current = self.state.current_page;
        let last = self.accessible_page_count() - 1;
        match direction {
            ScrollDirection::Up if current > 0 => self.change_page(current - 1, now),
            ScrollDirection::Down if current < last => self.change_page(current + 1, now),
            _ => NavigationOutcome::Ignored(IgnoreReason::OutOfRange),
        }
    }

    /// Open the extended pages; returns true only on the first call
    pub fn unlock(&mut self, action: UnlockAction) -> bool {
        if self.state.has_unlocked_extended_pages {
            trace!(?action, "already unlocked");
            return false;
        }
        self.state.has_unlocked_extended_pages = true;
        info!(?action, pages = self.page_count, "extended pages unlocked");
        true
    }

    /// Advance timers; returns true when a running transition finished
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.state.phase.apply(nav_events::TRANSITION_END);
            trace!(page = self.state.current_page, "transition finished");
            return true;
        }
        false
    }

    /// Drop any pending timer so nothing fires after the stack goes away
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.state.phase.apply(nav_events::TRANSITION_END);
    }
}
