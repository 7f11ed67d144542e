//! Errors outside the lookup path.
//!
//! A failed lookup is not an error (it is `None`); these cover configuration
//! and the source loader.

use std::path::PathBuf;

/// Invalid environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be exactly one character, got {value:?}")]
    InvalidSeparator { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyExtension { var: &'static str },

    #[error("{var} must be one of 1, 0, true, false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// The source loader could not load a located file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading failed, e.g. the file vanished between probe and load.
    #[error("failed to read `{name}` from {}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
