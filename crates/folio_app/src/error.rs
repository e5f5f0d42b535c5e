//! Error types for folio_app

use thiserror::Error;

use folio_core::ConfigError;
use folio_layout::LayoutError;
use folio_platform::PlatformError;

/// Errors surfaced by the page controller
#[derive(Error, Debug)]
pub enum FolioError {
    /// Site configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Host handed in malformed input
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Geometry lookup failed
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Page index outside the stack
    #[error("No page at index {0}")]
    NoSuchPage(usize),

    /// Page name not present in the site
    #[error("Unknown page '{0}'")]
    UnknownPage(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for FolioError {
    fn from(err: anyhow::Error) -> Self {
        FolioError::Other(err.to_string())
    }
}

/// Result type for folio_app operations
pub type Result<T> = std::result::Result<T, FolioError>;
