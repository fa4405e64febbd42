//! Syllable counting
//!
//! The fitter only needs a number per word, so counting sits behind the
//! [`SyllableCounter`] trait. [`EnglishSyllableCounter`] is the built-in
//! heuristic; any `Fn(&str) -> usize` closure works as well.

mod english;
mod exceptions;

pub use english::EnglishSyllableCounter;
pub use exceptions::{embedded_exceptions, ExceptionTable};

/// Counts the syllables of a single word
///
/// Words come straight from the tokenizer, so they may carry inner punctuation
/// or digits. Zero is a valid answer.
pub trait SyllableCounter: Send + Sync {
    /// Number of syllables in `word`
    fn count(&self, word: &str) -> usize;
}

impl<F> SyllableCounter for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn count(&self, word: &str) -> usize {
        self(word)
    }
}
