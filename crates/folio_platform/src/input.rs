//! Input event types for wheel and scroll handling

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// Unit of a wheel delta, mirroring the DOM `deltaMode` field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    /// Delta is in pixels (`deltaMode == 0`)
    #[default]
    Pixel,
    /// Delta is in lines (`deltaMode == 1`), typical of discrete wheels on Firefox
    Line,
    /// Delta is in pages (`deltaMode == 2`)
    Page,
}

impl TryFrom<u32> for DeltaMode {
    type Error = PlatformError;

    fn try_from(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(DeltaMode::Pixel),
            1 => Ok(DeltaMode::Line),
            2 => Ok(DeltaMode::Page),
            other => Err(PlatformError::UnknownDeltaMode(other)),
        }
    }
}

/// A raw wheel event as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Horizontal delta in `delta_mode` units
    #[serde(default)]
    pub delta_x: f32,
    /// Vertical delta in `delta_mode` units (positive = content moves up)
    pub delta_y: f32,
    /// Unit of both deltas
    #[serde(default)]
    pub delta_mode: DeltaMode,
}

impl WheelEvent {
    pub fn new(delta_x: f32, delta_y: f32, delta_mode: DeltaMode) -> Self {
        Self {
            delta_x,
            delta_y,
            delta_mode,
        }
    }

    /// Vertical pixel-mode wheel event
    pub fn pixels(delta_y: f32) -> Self {
        Self::new(0.0, delta_y, DeltaMode::Pixel)
    }

    /// Build from raw host values, rejecting unknown modes and non-finite deltas
    pub fn from_raw(delta_x: f32, delta_y: f32, delta_mode: u32) -> Result<Self> {
        for (field, value) in [("delta_x", delta_x), ("delta_y", delta_y)] {
            if !value.is_finite() {
                return Err(PlatformError::NonFinite { field, value });
            }
        }
        Ok(Self::new(delta_x, delta_y, DeltaMode::try_from(delta_mode)?))
    }

    /// Vertical delta converted to pixels
    pub fn normalized_delta_y(&self, line_height: f32, page_height: f32) -> f32 {
        match self.delta_mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * line_height,
            DeltaMode::Page => self.delta_y * page_height,
        }
    }
}

/// Scroll geometry of a scrollable container
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top
    pub scroll_top: f32,
    /// Total content height
    pub scroll_height: f32,
    /// Visible viewport height of the container
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Validated constructor for metrics coming straight from a host
    pub fn checked(scroll_top: f32, scroll_height: f32, client_height: f32) -> Result<Self> {
        for (field, value) in [
            ("scroll_top", scroll_top),
            ("scroll_height", scroll_height),
            ("client_height", client_height),
        ] {
            if !value.is_finite() {
                return Err(PlatformError::NonFinite { field, value });
            }
        }
        if scroll_height < 0.0 || client_height < 0.0 {
            return Err(PlatformError::InvalidMetrics(format!(
                "negative extent (scroll_height={scroll_height}, client_height={client_height})"
            )));
        }
        Ok(Self::new(scroll_top, scroll_height, client_height))
    }

    /// Maximum reachable scroll offset (0 when content fits)
    pub fn max_scroll(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Same container scrolled to a different offset, clamped to range
    pub fn with_scroll_top(&self, scroll_top: f32) -> Self {
        Self {
            scroll_top: scroll_top.clamp(0.0, self.max_scroll()),
            ..*self
        }
    }
}

/// Input events the page controller understands
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Wheel or touchpad gesture over the page stack
    Wheel(WheelEvent),
    /// Native scroll of the active page's container settled at new metrics
    Scroll(ScrollMetrics),
    /// Viewport resized
    Resize { width: f32, height: f32 },
}
