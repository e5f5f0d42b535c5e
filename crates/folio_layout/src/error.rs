//! Error types for folio_layout

use thiserror::Error;

use crate::cache::ElementKey;

/// Measurement failures
///
/// None of these are fatal. Callers skip the current tick and keep the last
/// good visual state until a later tick can measure again.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// Element has never been measured
    #[error("Element {0:?} has not been laid out")]
    NotLaidOut(ElementKey),

    /// Element was measured but has no usable height yet
    #[error("Element {key:?} has unusable geometry (height {height})")]
    Unmeasured { key: ElementKey, height: f32 },

    /// Rect handed to a split computation cannot be divided by
    #[error("Cannot split against a rect of height {0}")]
    DegenerateRect(f32),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
