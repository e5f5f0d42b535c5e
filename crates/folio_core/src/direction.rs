//! Scroll and entry directions

use serde::{Deserialize, Serialize};

/// Direction of a boundary-scroll request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Toward the previous page
    Up,
    /// Toward the next page
    Down,
}

impl ScrollDirection {
    /// Direction implied by a vertical wheel delta (`None` for zero)
    pub fn from_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(ScrollDirection::Down)
        } else if delta_y < 0.0 {
            Some(ScrollDirection::Up)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

/// Where a page is being entered from, for slide-in animations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryDirection {
    /// First mount, no previous page
    Initial,
    /// Came from a page with a lower index (content slides up into view)
    FromAbove,
    /// Came from a page with a higher index
    FromBelow,
}

impl EntryDirection {
    pub fn between(previous: Option<usize>, current: usize) -> Self {
        match previous {
            None => EntryDirection::Initial,
            Some(prev) if prev < current => EntryDirection::FromAbove,
            Some(prev) if prev > current => EntryDirection::FromBelow,
            Some(_) => EntryDirection::Initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(ScrollDirection::from_delta(3.0), Some(ScrollDirection::Down));
        assert_eq!(ScrollDirection::from_delta(-0.5), Some(ScrollDirection::Up));
        assert_eq!(ScrollDirection::from_delta(0.0), None);
    }

    #[test]
    fn test_entry_direction() {
        assert_eq!(EntryDirection::between(None, 1), EntryDirection::Initial);
        assert_eq!(EntryDirection::between(Some(0), 1), EntryDirection::FromAbove);
        assert_eq!(EntryDirection::between(Some(2), 1), EntryDirection::FromBelow);
    }
}
