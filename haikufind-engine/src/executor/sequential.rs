//! Sequential execution strategy

use haikufind_core::{LineFitter, SyllableCounter};

use crate::executor::{match_sentence, ExecutionMode, Executor};
use crate::report::SentenceReport;

/// Single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run<C: SyllableCounter>(
        &self,
        sentences: &[&str],
        fitter: &LineFitter<C>,
    ) -> Vec<SentenceReport> {
        sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| match_sentence(index, sentence, fitter))
            .collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
