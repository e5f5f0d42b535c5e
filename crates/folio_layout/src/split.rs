//! Colour-split mapping
//!
//! A horizontal boundary line moves down (or up) the viewport as a page
//! scrolls, separating two flat background tones. Anything drawn across the
//! line is rendered twice, once per tone, and clipped at `split_percent` of
//! its own height so it stays legible on both sides.
//!
//! `split_percent` is always "how much of the element, from its top, lies
//! above the boundary". 0 means entirely below, 100 entirely above.

use folio_core::{SplitSpec, Tone};
use folio_platform::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Position of the boundary within `rect`, as a percentage of its height
pub fn compute_split(boundary_y: f32, rect: &Rect) -> Result<f32> {
    if !rect.is_measurable() {
        return Err(LayoutError::DegenerateRect(rect.height()));
    }
    if boundary_y <= rect.top() {
        return Ok(0.0);
    }
    if boundary_y >= rect.bottom() {
        return Ok(100.0);
    }
    Ok(((boundary_y - rect.top()) / rect.height() * 100.0).clamp(0.0, 100.0))
}

/// Rendered colour state of an element straddling (or not) the boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Entirely over a dark background
    SolidDark,
    /// Entirely over a light background
    SolidLight,
    /// Crossed by the boundary
    Split,
}

/// Derived split state of one element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitState {
    pub kind: SplitKind,
    /// Meaningful only for `SplitKind::Split`
    pub split_percent: f32,
}

impl SplitState {
    pub fn solid(tone: Tone) -> Self {
        let kind = match tone {
            Tone::Dark => SplitKind::SolidDark,
            Tone::Light => SplitKind::SolidLight,
        };
        Self {
            kind,
            split_percent: 0.0,
        }
    }

    pub fn split(split_percent: f32) -> Self {
        Self {
            kind: SplitKind::Split,
            split_percent,
        }
    }

    /// Classify `rect` against the boundary of a two-tone background
    pub fn classify(boundary_y: f32, rect: &Rect, spec: &SplitSpec) -> Result<Self> {
        let percent = compute_split(boundary_y, rect)?;
        Ok(if boundary_y <= rect.top() {
            Self::solid(spec.lower)
        } else if boundary_y >= rect.bottom() {
            Self::solid(spec.upper)
        } else {
            Self::split(percent)
        })
    }

    pub fn is_split(&self) -> bool {
        self.kind == SplitKind::Split
    }

    /// Background tone for solid states
    pub fn tone(&self) -> Option<Tone> {
        match self.kind {
            SplitKind::SolidDark => Some(Tone::Dark),
            SplitKind::SolidLight => Some(Tone::Light),
            SplitKind::Split => None,
        }
    }
}
