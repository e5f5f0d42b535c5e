//! Error types for folio_core

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for a `SiteConfig`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config parsed but describes an impossible site
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for folio_core operations
pub type Result<T> = std::result::Result<T, ConfigError>;
