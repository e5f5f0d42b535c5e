//! Page descriptions
//!
//! Every page in the stack is described by a [`PageSpec`]: how it takes
//! wheel input ([`PageKind`]) and what sits behind the indicator dots while
//! it is current ([`Backdrop`]).

use serde::{Deserialize, Serialize};

/// How a page consumes wheel input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Fits the viewport; the controller turns wheel input into page changes
    #[default]
    Static,
    /// Owns an internal scroll container and forwards boundary scrolls
    Scrollable,
    /// Not scrollable, but handles its own wheel input while active and
    /// forwards every above-threshold gesture as a boundary scroll
    Flip,
}

impl PageKind {
    /// Whether wheel input on this page bypasses the controller's own paging
    pub fn manages_wheel(&self) -> bool {
        !matches!(self, PageKind::Static)
    }
}

/// Flat background colour of a screen region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    /// The legible ink colour on top of this background
    pub fn contrast(&self) -> Tone {
        match self {
            Tone::Light => Tone::Dark,
            Tone::Dark => Tone::Light,
        }
    }
}

/// How scroll progress moves the colour boundary down the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMapping {
    /// Boundary starts at the viewport bottom and rises: `1 - p`
    #[default]
    Descending,
    /// Boundary starts at the viewport top and sinks: `p`
    Ascending,
    /// Like `Descending` at twice the rate, completing at half the scroll: `1 - 2p`
    DoubleRate,
}

impl SplitMapping {
    /// Boundary position as a fraction of the viewport height, in `[0, 1]`
    pub fn boundary_fraction(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            SplitMapping::Descending => 1.0 - p,
            SplitMapping::Ascending => p,
            SplitMapping::DoubleRate => (1.0 - 2.0 * p).max(0.0),
        }
    }

    /// Boundary y coordinate in viewport pixels
    pub fn boundary_y(&self, progress: f32, viewport_height: f32) -> f32 {
        viewport_height * self.boundary_fraction(progress)
    }
}

/// Slice of scroll progress over which a strike-through line draws
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrikeWindow {
    pub start: f32,
    pub end: f32,
}

impl StrikeWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

/// A progressive two-tone background
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitSpec {
    #[serde(default)]
    pub mapping: SplitMapping,
    /// Background above the boundary line
    pub upper: Tone,
    /// Background below the boundary line
    pub lower: Tone,
    /// Split percent shown while the page is off screen
    #[serde(default = "default_rest_percent")]
    pub rest_percent: f32,
    /// Peak opacity of the decoration layer revealed below the boundary
    #[serde(default)]
    pub overlay_max: f32,
    /// Strike-through drawn across the content as the page scrolls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<StrikeWindow>,
}

fn default_rest_percent() -> f32 {
    100.0
}

impl SplitSpec {
    pub fn new(mapping: SplitMapping, upper: Tone, lower: Tone, rest_percent: f32) -> Self {
        Self {
            mapping,
            upper,
            lower,
            rest_percent,
            overlay_max: 0.0,
            strike: None,
        }
    }

    pub fn with_overlay(mut self, overlay_max: f32) -> Self {
        self.overlay_max = overlay_max;
        self
    }

    pub fn with_strike(mut self, start: f32, end: f32) -> Self {
        self.strike = Some(StrikeWindow::new(start, end));
        self
    }
}

/// Background behind the indicator while a page is current
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    Light,
    Dark,
    Split(SplitSpec),
}

impl Backdrop {
    pub fn split(&self) -> Option<&SplitSpec> {
        match self {
            Backdrop::Split(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn solid_tone(&self) -> Option<Tone> {
        match self {
            Backdrop::Light => Some(Tone::Light),
            Backdrop::Dark => Some(Tone::Dark),
            Backdrop::Split(_) => None,
        }
    }
}

/// One page of the stack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Unique page name
    pub name: String,
    #[serde(default)]
    pub kind: PageKind,
    pub backdrop: Backdrop,
    /// Last page in reading order: never forwards downward boundary scrolls
    #[serde(default)]
    pub terminal: bool,
    /// Reset scroll progress to 0 when the page is left
    #[serde(default)]
    pub reset_on_leave: bool,
    /// Progress reported regardless of scrolling; gives the page a capsule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_progress: Option<f32>,
}

impl PageSpec {
    pub fn new(name: impl Into<String>, kind: PageKind, backdrop: Backdrop) -> Self {
        Self {
            name: name.into(),
            kind,
            backdrop,
            terminal: false,
            reset_on_leave: false,
            fixed_progress: None,
        }
    }

    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    pub fn reset_on_leave(mut self) -> Self {
        self.reset_on_leave = true;
        self
    }

    pub fn with_fixed_progress(mut self, progress: f32) -> Self {
        self.fixed_progress = Some(progress);
        self
    }

    /// Whether the active indicator dot stretches into a progress capsule
    pub fn shows_capsule(&self) -> bool {
        self.kind == PageKind::Scrollable || self.fixed_progress.is_some()
    }
}
