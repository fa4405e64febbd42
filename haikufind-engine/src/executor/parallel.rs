//! Parallel execution strategy

use std::sync::Arc;

use haikufind_core::{LineFitter, SyllableCounter};
use rayon::prelude::*;

use crate::error::Result;
use crate::executor::{match_sentence, ExecutionMode, Executor};
use crate::report::SentenceReport;

/// Multi-threaded executor
///
/// Runs on rayon's global pool unless built with a fixed thread count.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl ParallelExecutor {
    /// Executor on the global pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor on a dedicated pool of `threads` workers
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("haikufind-{i}"))
            .build()?;
        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }

    /// Number of worker threads sentences are spread over
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn run<C: SyllableCounter>(
        &self,
        sentences: &[&str],
        fitter: &LineFitter<C>,
    ) -> Vec<SentenceReport> {
        let work = || {
            sentences
                .par_iter()
                .enumerate()
                .map(|(index, sentence)| match_sentence(index, sentence, fitter))
                .collect()
        };

        match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
