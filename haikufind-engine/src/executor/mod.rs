//! Execution strategies for matching sentences
//!
//! Sentences never share state, so they can be matched in any order on any
//! thread. Every executor still returns its reports in sentence order.

use haikufind_core::{LineFitter, SyllableCounter};
use serde::Deserialize;

use crate::report::SentenceReport;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded, in order
    Sequential,
    /// Fan sentences out over worker threads
    Parallel,
    /// Pick per call from the sentence count
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Match every sentence, returning one report per sentence in order
    fn run<C: SyllableCounter>(
        &self,
        sentences: &[&str],
        fitter: &LineFitter<C>,
    ) -> Vec<SentenceReport>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Select sequential or parallel execution for `sentence_count` sentences
pub fn auto_select(sentence_count: usize, threshold: usize) -> ExecutionMode {
    if sentence_count < threshold {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

/// Tokenize and fit one sentence
pub(crate) fn match_sentence<C: SyllableCounter>(
    index: usize,
    sentence: &str,
    fitter: &LineFitter<C>,
) -> SentenceReport {
    let outcome = fitter.match_sentence(sentence);
    if let Err(e) = &outcome {
        log::debug!("sentence {index} is not a haiku ({:?}): {e}", e.kind());
    }
    SentenceReport {
        index,
        sentence: sentence.to_owned(),
        outcome,
    }
}
