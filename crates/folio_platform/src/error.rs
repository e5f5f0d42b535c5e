//! Platform error types

use thiserror::Error;

/// Errors raised while translating host input into Folio events
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// Host reported a delta mode outside the DOM range (0, 1, 2)
    #[error("Unknown wheel delta mode: {0}")]
    UnknownDeltaMode(u32),

    /// Host reported a non-finite number for a coordinate or delta
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// Host reported scroll metrics that cannot describe a container
    #[error("Invalid scroll metrics: {0}")]
    InvalidMetrics(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
