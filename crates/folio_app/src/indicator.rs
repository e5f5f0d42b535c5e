//! Page indicator
//!
//! One dot per reachable page. Each dot picks its colour from whatever
//! background sits behind it: the current page's solid tone, or, on a
//! split page, its own position relative to the moving boundary. The dot
//! of an active scrollable page, or of a page with a fixed progress,
//! becomes a capsule that fills with the page's progress.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use folio_core::{Backdrop, PageIndex, SplitSpec, Tone};
use folio_layout::{ElementKey, LayoutCache, SplitKind, SplitState};

/// Ink of the capsule fill
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "ink", rename_all = "snake_case")]
pub enum FillInk {
    Solid { tone: Tone },
    /// Fill crosses the boundary; the top `ratio` percent takes `upper`
    Split { upper: Tone, lower: Tone, ratio: f32 },
}

/// Progress fill of the active capsule
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CapsuleFill {
    /// Fill height, percent of the capsule
    pub height_percent: f32,
    pub ink: FillInk,
}

/// Rendered state of one dot
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DotView {
    pub page: PageIndex,
    pub active: bool,
    pub state: SplitState,
    pub fill: Option<CapsuleFill>,
}

/// Dots for one frame
pub type DotViews = SmallVec<[DotView; 8]>;

/// What the indicator needs to know about the current page
#[derive(Clone, Copy, Debug)]
pub struct IndicatorInput<'a> {
    pub current_page: PageIndex,
    pub accessible_pages: usize,
    pub backdrop: &'a Backdrop,
    /// Live progress of the current page
    pub progress: f32,
    /// Whether the current page shows a progress capsule
    pub capsule: bool,
}

/// Colour state of dot `index` against the current page's backdrop
///
/// Missing dot geometry falls back to the light solid state.
pub fn dot_state(
    index: PageIndex,
    backdrop: &Backdrop,
    progress: f32,
    layout: &LayoutCache,
) -> SplitState {
    let Some(spec) = backdrop.split() else {
        return SplitState::solid(backdrop.solid_tone().unwrap_or(Tone::Light));
    };

    let boundary_y = spec.mapping.boundary_y(progress, layout.viewport_height());
    let state = layout
        .measure(ElementKey::IndicatorDot(index))
        .and_then(|rect| SplitState::classify(boundary_y, &rect, spec));
    match state {
        Ok(state) => state,
        Err(err) => {
            trace!(dot = index, %err, "dot geometry unavailable");
            SplitState::solid(Tone::Light)
        }
    }
}

/// Capsule fill for a dot in `state`, filled to `progress`
pub fn capsule_fill(state: &SplitState, spec: Option<&SplitSpec>, progress: f32) -> CapsuleFill {
    let fill = (progress * 100.0).clamp(0.0, 100.0);
    let ink = match (state.kind, spec) {
        (SplitKind::Split, Some(spec)) => {
            let split = state.split_percent;
            if fill <= split {
                FillInk::Solid {
                    tone: spec.upper.contrast(),
                }
            } else if split <= 0.0 {
                FillInk::Solid {
                    tone: spec.lower.contrast(),
                }
            } else {
                FillInk::Split {
                    upper: spec.upper.contrast(),
                    lower: spec.lower.contrast(),
                    ratio: split / fill * 100.0,
                }
            }
        }
        _ => FillInk::Solid {
            tone: state.tone().unwrap_or(Tone::Light).contrast(),
        },
    };
    CapsuleFill {
        height_percent: fill,
        ink,
    }
}

/// Render every reachable dot
pub fn render(input: &IndicatorInput<'_>, layout: &LayoutCache) -> DotViews {
    (0..input.accessible_pages)
        .map(|page| {
            let state = dot_state(page, input.backdrop, input.progress, layout);
            let active = page == input.current_page;
            let fill = (active && input.capsule)
                .then(|| capsule_fill(&state, input.backdrop.split(), input.progress));
            DotView {
                page,
                active,
                state,
                fill,
            }
        })
        .collect()
}
