//! Wheel classification
//!
//! Decides whether a wheel event came from a notched mouse wheel or from a
//! continuous touchpad gesture. Mouse wheels get a custom smooth-scroll
//! animation; touchpads keep native scrolling. The decision is a heuristic
//! on delta shape, so misclassification at the margins is expected.

use folio_platform::{DeltaMode, WheelEvent};
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;

/// Classified origin of a wheel event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelSource {
    MouseWheel,
    Touchpad,
}

/// Wheel heuristics parameterized by the site's wheel tunables
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelClassifier {
    line_height: f32,
    min_mouse_delta: f32,
    notch: f32,
}

impl Default for WheelClassifier {
    fn default() -> Self {
        Self::new(&WheelConfig::default())
    }
}

impl WheelClassifier {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            line_height: config.line_height_px,
            min_mouse_delta: config.mouse_min_delta,
            notch: config.mouse_notch,
        }
    }

    /// Vertical delta in pixels
    ///
    /// Line mode uses the configured line height, page mode the viewport
    /// height.
    pub fn normalize(&self, event: &WheelEvent, viewport_height: f32) -> f32 {
        event.normalized_delta_y(self.line_height, viewport_height)
    }

    pub fn classify(&self, event: &WheelEvent, viewport_height: f32) -> WheelSource {
        let dy = self.normalize(event, viewport_height).abs();

        let is_mouse = event.delta_x == 0.0
            && (dy >= self.min_mouse_delta
                || dy % self.notch == 0.0
                || event.delta_mode == DeltaMode::Line);

        if is_mouse {
            WheelSource::MouseWheel
        } else {
            WheelSource::Touchpad
        }
    }
}
