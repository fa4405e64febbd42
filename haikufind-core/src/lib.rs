//! Find haiku hiding in ordinary prose
//!
//! Text is split into sentences, each sentence into words, and the words are
//! fitted greedily onto 5-7-5 syllable lines. A sentence either becomes a
//! [`Haiku`] or is rejected with a [`FitError`] explaining why.
//!
//! # Example
//!
//! ```rust
//! let found = haikufind_core::find(
//!     "haiku can be found wherever you are looking with help of some code",
//! );
//! assert_eq!(found.len(), 1);
//! assert_eq!(
//!     found[0].to_string(),
//!     "haiku can be found\nwherever you are looking\nwith help of some code",
//! );
//! ```
//!
//! Syllable counting is pluggable through [`SyllableCounter`]; any
//! `Fn(&str) -> usize` will do:
//!
//! ```rust
//! use haikufind_core::{find_with, LinePattern};
//!
//! let one_each = |_: &str| 1usize;
//! let pattern = LinePattern::new(vec![1, 2]).unwrap();
//! let found = find_with("a b c. d e f g.", &pattern, &one_each);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].to_string(), "a\nb c");
//! ```

pub mod error;
pub mod fitter;
pub mod haiku;
pub mod pattern;
pub mod segmenter;
pub mod syllable;
pub mod tokenizer;

pub use error::{FitError, FitErrorKind, FitResult, PatternError};
pub use fitter::{fit, LineFitter};
pub use haiku::Haiku;
pub use pattern::{LinePattern, HAIKU_TARGETS};
pub use segmenter::{segment, sentences, Sentences};
pub use syllable::{EnglishSyllableCounter, SyllableCounter};
pub use tokenizer::tokenize;

/// Find every 5-7-5 haiku in `text` using the built-in English counter
///
/// Sentences that do not fit are skipped. Results follow sentence order.
pub fn find(text: &str) -> Vec<Haiku> {
    find_with(text, &LinePattern::haiku(), &EnglishSyllableCounter::new())
}

/// Find every sentence of `text` that fits `pattern` under `counter`
pub fn find_with<C>(text: &str, pattern: &LinePattern, counter: &C) -> Vec<Haiku>
where
    C: SyllableCounter + ?Sized,
{
    sentences(text)
        .filter_map(|sentence| match fit(&tokenize(sentence), pattern, counter) {
            Ok(haiku) => Some(haiku),
            Err(e) => {
                log::debug!("skipping {sentence:?}: {e}");
                None
            }
        })
        .collect()
}
