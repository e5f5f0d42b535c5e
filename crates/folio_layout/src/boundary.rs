//! Boundary detection for scroll containers

use folio_core::ScrollDirection;
use folio_platform::ScrollMetrics;
use serde::{Deserialize, Serialize};

/// Rounding slack at the bottom edge, in pixels
const BOTTOM_SLACK: f32 = 1.0;

/// Whether a container sits at its top or bottom edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundaryFlags {
    pub at_top: bool,
    pub at_bottom: bool,
}

impl BoundaryFlags {
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self {
            at_top: metrics.scroll_top == 0.0,
            at_bottom: metrics.scroll_top + metrics.client_height
                >= metrics.scroll_height - BOTTOM_SLACK,
        }
    }

    /// Whether moving in `direction` would push past the edge we sit on
    pub fn blocks(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Up => self.at_top,
            ScrollDirection::Down => self.at_bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_at_top() {
        let flags = BoundaryFlags::from_metrics(&ScrollMetrics::new(0.0, 2000.0, 800.0));
        assert!(flags.at_top);
        assert!(!flags.at_bottom);
        assert!(flags.blocks(ScrollDirection::Up));
        assert!(!flags.blocks(ScrollDirection::Down));
    }

    #[test]
    fn test_flags_at_bottom_with_slack() {
        let flags = BoundaryFlags::from_metrics(&ScrollMetrics::new(1199.4, 2000.0, 800.0));
        assert!(!flags.at_top);
        assert!(flags.at_bottom);
        let flags = BoundaryFlags::from_metrics(&ScrollMetrics::new(1198.0, 2000.0, 800.0));
        assert!(!flags.at_bottom);
    }

    #[test]
    fn test_unscrollable_is_both() {
        let flags = BoundaryFlags::from_metrics(&ScrollMetrics::new(0.0, 600.0, 800.0));
        assert!(flags.at_top && flags.at_bottom);
    }
}
