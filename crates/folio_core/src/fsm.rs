//! State machine plumbing
//!
//! States are plain enums that answer "what do I become on this event?".
//! Returning `None` means the event is ignored in the current state.

/// Event-driven state transitions
pub trait StateTransitions: Sized + Copy {
    /// Next state for `event`, or `None` to stay put
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply `event` in place, returning whether the state changed
    fn apply(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}

/// Navigation events
pub mod nav_events {
    /// A page change was accepted and the slide started
    pub const TRANSITION_START: u32 = 20000;
    /// The slide timer elapsed
    pub const TRANSITION_END: u32 = 20001;
}

/// Phase of the page stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NavPhase {
    /// Page at rest, navigation allowed
    #[default]
    Idle,
    /// Slide in progress, navigation blocked
    Transitioning,
}

impl NavPhase {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, NavPhase::Transitioning)
    }
}

impl StateTransitions for NavPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use nav_events::*;

        match (self, event) {
            (NavPhase::Idle, TRANSITION_START) => Some(NavPhase::Transitioning),
            (NavPhase::Transitioning, TRANSITION_END) => Some(NavPhase::Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_phase_cycle() {
        let mut phase = NavPhase::Idle;
        assert!(phase.apply(nav_events::TRANSITION_START));
        assert!(phase.is_transitioning());
        // A second start is rejected while sliding
        assert!(!phase.apply(nav_events::TRANSITION_START));
        assert!(phase.apply(nav_events::TRANSITION_END));
        assert_eq!(phase, NavPhase::Idle);
    }

    #[test]
    fn test_end_while_idle_is_ignored() {
        assert_eq!(NavPhase::Idle.on_event(nav_events::TRANSITION_END), None);
    }
}
