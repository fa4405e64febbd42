//! Finder configuration
//!
//! Built in code through [`FinderConfig::builder`] or read from TOML:
//!
//! ```toml
//! pattern = [5, 7, 5]
//! execution_mode = "adaptive"   # "sequential" | "parallel" | "adaptive"
//! threads = 4
//! parallel_threshold = 64
//!
//! [exceptions]
//! grabthar = 2
//! ```

use std::collections::HashMap;
use std::path::Path;

use haikufind_core::LinePattern;
use serde::Deserialize;

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;

/// Default configuration constants
pub mod defaults {
    /// Sentence count at which adaptive mode switches to parallel
    pub const PARALLEL_THRESHOLD: usize = 64;
}

/// Configuration for a [`crate::HaikuFinder`]
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    /// Per-line syllable targets
    pub pattern: LinePattern,
    /// How sentences are scheduled
    pub execution_mode: ExecutionMode,
    /// Worker threads for parallel runs (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Minimum sentence count for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Extra syllable counts for the English counter
    pub exceptions: HashMap<String, usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            pattern: LinePattern::haiku(),
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            exceptions: HashMap::new(),
        }
    }
}

impl FinderConfig {
    /// Create a configuration builder
    pub fn builder() -> FinderConfigBuilder {
        FinderConfigBuilder::new()
    }

    /// Always process sentences one after another
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            ..Default::default()
        }
    }

    /// Always fan sentences out over worker threads
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(toml_str)?;
        file.into_builder().build()
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading finder configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(EngineError::Config(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        if self.parallel_threshold == 0 {
            return Err(EngineError::Config(
                "parallel_threshold must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// On-disk form of [`FinderConfig`]; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    pattern: Option<Vec<usize>>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
    #[serde(default)]
    exceptions: HashMap<String, usize>,
}

impl FileConfig {
    fn into_builder(self) -> FinderConfigBuilder {
        let mut builder = FinderConfigBuilder::new()
            .threads(self.threads)
            .exceptions(self.exceptions);
        if let Some(pattern) = self.pattern {
            builder = builder.pattern(pattern);
        }
        if let Some(mode) = self.execution_mode {
            builder = builder.execution_mode(mode);
        }
        if let Some(threshold) = self.parallel_threshold {
            builder = builder.parallel_threshold(threshold);
        }
        builder
    }
}

/// Fluent builder for [`FinderConfig`]
#[derive(Debug, Default)]
pub struct FinderConfigBuilder {
    pattern: Option<Vec<usize>>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
    exceptions: HashMap<String, usize>,
}

impl FinderConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-line syllable targets
    pub fn pattern(mut self, targets: impl Into<Vec<usize>>) -> Self {
        self.pattern = Some(targets.into());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the adaptive switch-over point, in sentences
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.parallel_threshold = Some(sentences);
        self
    }

    /// Add one syllable exception
    pub fn exception(mut self, word: impl Into<String>, syllables: usize) -> Self {
        self.exceptions.insert(word.into(), syllables);
        self
    }

    /// Add several syllable exceptions
    pub fn exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        self.exceptions
            .extend(exceptions.into_iter().map(|(w, n)| (w.into(), n)));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FinderConfig> {
        let mut config = FinderConfig::default();

        if let Some(targets) = self.pattern {
            config.pattern = LinePattern::new(targets)?;
        }

        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }

        config.threads = self.threads;

        if let Some(threshold) = self.parallel_threshold {
            config.parallel_threshold = threshold;
        }

        config.exceptions = self.exceptions;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.pattern.targets(), &[5, 7, 5]);
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.threads, None);
        assert_eq!(config.parallel_threshold, defaults::PARALLEL_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            FinderConfig::sequential().execution_mode,
            ExecutionMode::Sequential
        );
        assert_eq!(
            FinderConfig::parallel().execution_mode,
            ExecutionMode::Parallel
        );
    }

    #[test]
    fn test_builder() {
        let config = FinderConfig::builder()
            .pattern(vec![3, 5, 3])
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(2))
            .parallel_threshold(10)
            .exception("grabthar", 2)
            .build()
            .unwrap();

        assert_eq!(config.pattern.targets(), &[3, 5, 3]);
        assert_eq!(config.execution_mode, ExecutionMode::Parallel);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.exceptions.get("grabthar"), Some(&2));
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(matches!(
            FinderConfig::builder().threads(Some(0)).build(),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            FinderConfig::builder().parallel_threshold(0).build(),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            FinderConfig::builder().pattern(vec![5, 0]).build(),
            Err(EngineError::Pattern(_))
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let config = FinderConfig::from_toml_str(
            r#"
            pattern = [5, 7, 5, 7, 7]
            execution_mode = "sequential"
            parallel_threshold = 8

            [exceptions]
            haiku = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.pattern.len(), 5);
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.threads, None);
        assert_eq!(config.parallel_threshold, 8);
        assert_eq!(config.exceptions.get("haiku"), Some(&3));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            FinderConfig::from_toml_str("").unwrap(),
            FinderConfig::default()
        );
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            FinderConfig::from_toml_str("execution_mode = \"turbo\""),
            Err(EngineError::Toml(_))
        ));
        assert!(matches!(
            FinderConfig::from_toml_str("colour = \"blue\""),
            Err(EngineError::Toml(_))
        ));
        assert!(matches!(
            FinderConfig::from_toml_str("pattern = []"),
            Err(EngineError::Pattern(_))
        ));
        assert!(matches!(
            FinderConfig::from_toml_str("threads = 0"),
            Err(EngineError::Config(_))
        ));
    }
}
