//! Error types for movmusic.
//!
//! Missing tags are not errors: they are modelled by `tags::FieldLookup` and
//! handled by the namer. What ends up here is filesystem and configuration
//! trouble that a caller has to see.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create destination {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for movmusic operations
pub type Result<T> = std::result::Result<T, Error>;
