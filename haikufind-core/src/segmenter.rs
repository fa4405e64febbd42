//! Heuristic sentence segmentation
//!
//! A boundary is a letter or digit, then one of `.`, `!` or `?`, then at least
//! one whitespace character. The sentence keeps its terminator; the whitespace
//! is dropped. Abbreviations are not recognised, so "Dr. Smith" splits after
//! "Dr." and `"words!! More"` does not split at all.

use std::sync::OnceLock;

use regex::{Matches, Regex};

static BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn boundary() -> &'static Regex {
    BOUNDARY.get_or_init(|| Regex::new(r"[\p{L}\p{N}][.!?]\s+").expect("boundary pattern is valid"))
}

/// Iterator over the sentences of a text, in order
///
/// Yields trimmed slices of the input. The iterator is single-pass; call
/// [`sentences`] again to rescan.
#[derive(Debug)]
pub struct Sentences<'t> {
    text: &'t str,
    boundaries: Matches<'static, 't>,
    last: usize,
    finished: bool,
}

impl<'t> Iterator for Sentences<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(m) = self.boundaries.next() {
            let sentence = self.text[self.last..m.end()].trim();
            self.last = m.end();
            log::trace!("sentence: {sentence:?}");
            return Some(sentence);
        }

        // Whatever follows the last boundary, if anything
        self.finished = true;
        let rest = self.text[self.last..].trim();
        if rest.is_empty() {
            None
        } else {
            log::trace!("sentence: {rest:?}");
            Some(rest)
        }
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}

/// Scan `text` for sentences
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        text,
        boundaries: boundary().find_iter(text),
        last: 0,
        finished: false,
    }
}

/// Split `text` into sentences
pub fn segment(text: &str) -> Vec<&str> {
    sentences(text).collect()
}
