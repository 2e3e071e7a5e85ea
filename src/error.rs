//! Error types for carousel construction and configuration.
//!
//! Navigation and input handling never fail: out-of-range requests clamp and
//! unmatched pointer events are ignored. Only building a controller and
//! loading its configuration can go wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::CarouselConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error while reading a configuration file
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration was not valid JSON for the expected shape
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Drag threshold must be a finite, non-negative pixel distance
    #[error("invalid drag threshold: {0}")]
    InvalidThreshold(f32),

    /// A styling hook name was left empty
    #[error("styling hook `{0}` must not be empty")]
    EmptyHook(&'static str),
}

/// Errors raised while constructing a [`crate::Carousel`].
#[derive(Error, Debug)]
pub enum CarouselError {
    /// The group had no items to navigate between
    #[error("carousel group has no items")]
    NoItems,

    /// The supplied configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result type alias for carousel construction
pub type CarouselResult<T> = Result<T, CarouselError>;
