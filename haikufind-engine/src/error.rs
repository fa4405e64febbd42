//! Engine error types
//!
//! Fit failures are not errors at this layer: they are reported per sentence
//! by [`crate::HaikuFinder::analyze`]. What can fail here is setting a finder
//! up.

use std::path::PathBuf;

use haikufind_core::PatternError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid line pattern
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] PatternError),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::FinderConfig`]
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Worker pool could not be started
    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
