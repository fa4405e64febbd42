//! Configurable haiku finding over whole documents
//!
//! This crate wraps the line fitter from `haikufind-core` with configuration,
//! per-sentence reporting and sequential or parallel execution.
//!
//! ```rust
//! use haikufind_engine::{ExecutionMode, FinderConfig, HaikuFinder};
//!
//! let config = FinderConfig::builder()
//!     .execution_mode(ExecutionMode::Sequential)
//!     .build()
//!     .unwrap();
//! let finder = HaikuFinder::with_config(config).unwrap();
//! let found = finder.find("haiku can be found wherever you are looking with help of some code");
//! assert_eq!(found.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod finder;
pub mod report;

// Re-export key types
pub use config::{FinderConfig, FinderConfigBuilder};
pub use error::{EngineError, Result};
pub use executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
#[cfg(feature = "parallel")]
pub use executor::ParallelExecutor;
pub use finder::HaikuFinder;
pub use report::SentenceReport;

// Re-export from core for convenience
pub use haikufind_core::{
    EnglishSyllableCounter, FitError, FitErrorKind, Haiku, LinePattern, SyllableCounter,
};
