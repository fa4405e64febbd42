//! Haiku finder and builder entry points

use haikufind_core::{
    segment, EnglishSyllableCounter, Haiku, LineFitter, LinePattern, SyllableCounter,
};

use crate::config::FinderConfig;
use crate::error::Result;
#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
use crate::executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
use crate::report::SentenceReport;

/// Finds haiku in text according to a [`FinderConfig`]
///
/// Cheap to share: matching only borrows the finder, so one instance can serve
/// many threads.
#[derive(Debug)]
pub struct HaikuFinder<C = EnglishSyllableCounter> {
    fitter: LineFitter<C>,
    config: FinderConfig,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

impl HaikuFinder<EnglishSyllableCounter> {
    /// Create a finder with default configuration
    pub fn new() -> Self {
        let config = FinderConfig::default();
        Self {
            fitter: LineFitter::new(config.pattern.clone(), EnglishSyllableCounter::new()),
            config,
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::new(),
        }
    }

    /// Create a finder using the English counter plus the configured exceptions
    pub fn with_config(config: FinderConfig) -> Result<Self> {
        let counter = EnglishSyllableCounter::with_overrides(
            config.exceptions.iter().map(|(w, n)| (w.as_str(), *n)),
        );
        Self::with_counter(config, counter)
    }
}

impl Default for HaikuFinder<EnglishSyllableCounter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SyllableCounter> HaikuFinder<C> {
    /// Create a finder with a custom syllable counter
    ///
    /// `config.exceptions` only feeds the built-in English counter and is
    /// ignored here.
    pub fn with_counter(config: FinderConfig, counter: C) -> Result<Self> {
        config.validate()?;
        if !config.exceptions.is_empty() {
            log::debug!(
                "ignoring {} syllable exceptions for a custom counter",
                config.exceptions.len()
            );
        }

        #[cfg(feature = "parallel")]
        let parallel = match config.threads {
            Some(threads) => ParallelExecutor::with_threads(threads)?,
            None => ParallelExecutor::new(),
        };

        Ok(Self {
            fitter: LineFitter::new(config.pattern.clone(), counter),
            config,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }

    /// Every haiku in `text`, in sentence order
    pub fn find(&self, text: &str) -> Vec<Haiku> {
        self.find_with_mode(text, self.config.execution_mode)
    }

    /// Like [`find`](Self::find) with an explicit execution mode
    pub fn find_with_mode(&self, text: &str, mode: ExecutionMode) -> Vec<Haiku> {
        self.analyze_with_mode(text, mode)
            .into_iter()
            .filter_map(SentenceReport::into_haiku)
            .collect()
    }

    /// One report per sentence, including the ones that did not fit
    pub fn analyze(&self, text: &str) -> Vec<SentenceReport> {
        self.analyze_with_mode(text, self.config.execution_mode)
    }

    /// Like [`analyze`](Self::analyze) with an explicit execution mode
    pub fn analyze_with_mode(&self, text: &str, mode: ExecutionMode) -> Vec<SentenceReport> {
        let sentences = segment(text);
        let mode = self.resolve(mode, sentences.len());
        log::debug!("matching {} sentences ({mode:?})", sentences.len());

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel.run(&sentences, &self.fitter),
            _ => SequentialExecutor.run(&sentences, &self.fitter),
        }
    }

    /// Turn `Adaptive` into a concrete mode for `sentence_count` sentences
    fn resolve(&self, mode: ExecutionMode, sentence_count: usize) -> ExecutionMode {
        match mode {
            ExecutionMode::Adaptive => auto_select(sentence_count, self.config.parallel_threshold),
            other => other,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Line pattern sentences are fitted to
    pub fn pattern(&self) -> &LinePattern {
        self.fitter.pattern()
    }

    /// Syllable counter in use
    pub fn counter(&self) -> &C {
        self.fitter.counter()
    }
}
