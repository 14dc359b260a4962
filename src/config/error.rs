//! Error type for configuration construction and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, saving or loading an [`AppConfig`].
///
/// Validation problems are not errors; see [`Finding`].
///
/// [`AppConfig`]: crate::config::AppConfig
/// [`Finding`]: crate::config::Finding
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing or unreadable.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON or has the wrong shape.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The destination could not be created or written.
    #[error("failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A float field holds NaN or an infinity, which JSON cannot represent.
    #[error("cannot save non-finite value in {field}")]
    NonFinite { field: &'static str },

    /// The settings could not be encoded (e.g. a non UTF-8 path).
    #[error("failed to serialise config: {0}")]
    Serialize(#[source] serde_json::Error),
}
