//! Greedy line fitting
//!
//! Words are poured into the current line until its syllable budget hits zero
//! exactly, then the next line starts. A word that overshoots ends the attempt:
//! earlier placements are never revisited, so a sentence that only fits under
//! some other split is reported as a failure.

use std::cmp::Ordering;

use crate::error::{FitError, FitResult};
use crate::haiku::Haiku;
use crate::pattern::LinePattern;
use crate::syllable::SyllableCounter;
use crate::tokenizer::tokenize;

/// Fit `words` onto the lines of `pattern`
///
/// Succeeds only when every line meets its target exactly and every word has
/// been placed. Zero-syllable words are legal and simply ride along on the
/// line being filled.
pub fn fit<S, C>(words: &[S], pattern: &LinePattern, counter: &C) -> FitResult<Haiku>
where
    S: AsRef<str>,
    C: SyllableCounter + ?Sized,
{
    if words.is_empty() {
        return Err(FitError::EmptySentence);
    }

    let line_count = pattern.len();
    let mut remaining: Vec<i64> = pattern
        .targets()
        .iter()
        .map(|&t| i64::try_from(t).unwrap_or(i64::MAX))
        .collect();
    let mut lines = vec![String::new(); line_count];
    let mut line = 0;
    let mut index = 0;

    loop {
        if line == line_count && index == words.len() {
            return Ok(Haiku::from_lines(finish(lines)));
        }
        if index == words.len() {
            return Err(FitError::InsufficientWords {
                line,
                remaining,
                lines: finish(lines),
            });
        }
        if line == line_count {
            return Err(FitError::ExcessWords {
                unconsumed: words.len() - index,
                lines: finish(lines),
            });
        }

        let word = words[index].as_ref();
        let syllables = i64::try_from(counter.count(word)).unwrap_or(i64::MAX);
        lines[line].push_str(word);
        lines[line].push(' ');
        remaining[line] = remaining[line].saturating_sub(syllables);

        match remaining[line].cmp(&0) {
            Ordering::Equal => {
                line += 1;
                index += 1;
            }
            Ordering::Less => {
                return Err(FitError::SyllableOverflow {
                    line,
                    word: word.to_owned(),
                    remaining,
                    lines: finish(lines),
                });
            }
            Ordering::Greater => index += 1,
        }
    }
}

/// Trim every line at both ends
///
/// Removes the separator after the last word and any whitespace carried in by
/// edge tokens, such as the empty token a double space produces.
fn finish(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_owned())
        .collect()
}

/// A line pattern paired with a syllable counter
///
/// The reusable form of [`fit`]: holds its configuration so callers can match
/// sentence after sentence, from several threads if the counter allows.
#[derive(Debug, Clone)]
pub struct LineFitter<C> {
    pattern: LinePattern,
    counter: C,
}

impl<C: SyllableCounter> LineFitter<C> {
    /// Pair `pattern` with `counter`
    pub fn new(pattern: LinePattern, counter: C) -> Self {
        Self { pattern, counter }
    }

    /// Fit already tokenized words
    pub fn fit<S: AsRef<str>>(&self, words: &[S]) -> FitResult<Haiku> {
        fit(words, &self.pattern, &self.counter)
    }

    /// Tokenize a sentence and fit its words
    pub fn match_sentence(&self, sentence: &str) -> FitResult<Haiku> {
        self.fit(&tokenize(sentence))
    }

    /// Targets this fitter fills
    pub fn pattern(&self) -> &LinePattern {
        &self.pattern
    }

    /// Counter used for every word
    pub fn counter(&self) -> &C {
        &self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitErrorKind;
    use crate::syllable::EnglishSyllableCounter;

    /// One syllable per word, except words made of dashes
    fn one_each(word: &str) -> usize {
        usize::from(!word.chars().all(|c| c == '-'))
    }

    fn english(sentence: &str) -> FitResult<Haiku> {
        LineFitter::new(LinePattern::haiku(), EnglishSyllableCounter::new()).match_sentence(sentence)
    }

    #[test]
    fn test_haiku_from_sentence() {
        //           1     2    3    4   5| 6   7   8   9  10 11  12|   13 14   15 16  17
        let h = english("the quick fast dude ran to the new red car in the state of mind to win")
            .unwrap();
        assert_eq!(
            h.to_string(),
            "the quick fast dude ran\nto the new red car in the\nstate of mind to win"
        );
        assert_eq!(h.lines()[1], "to the new red car in the");
    }

    #[test]
    fn test_too_many_words() {
        let err = english(
            "did u talk also about the breakup part? like why it happened and if that reason is still a thing?",
        )
        .unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::ExcessWords);
        assert!(err.to_string().contains("not a haiku - too many words"));
    }

    #[test]
    fn test_punctuation_rides_along() {
        let h = english("by grabthar's hammer, what a savings you can make - almost criminal")
            .unwrap();
        assert_eq!(
            h.to_string(),
            "by grabthar's hammer,\nwhat a savings you can make\n- almost criminal"
        );
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(english(""), Err(FitError::EmptySentence));
        let words: [&str; 0] = [];
        assert_eq!(
            fit(&words, &LinePattern::haiku(), &one_each),
            Err(FitError::EmptySentence)
        );
    }

    #[test]
    fn test_excess_words() {
        let words: Vec<String> = (0..18).map(|i| format!("w{i}")).collect();
        let err = fit(&words, &LinePattern::haiku(), &one_each).unwrap_err();
        match err {
            FitError::ExcessWords { unconsumed, lines } => {
                assert_eq!(unconsumed, 1);
                assert_eq!(lines[0], "w0 w1 w2 w3 w4");
                assert_eq!(lines[2], "w12 w13 w14 w15 w16");
            }
            other => panic!("expected ExcessWords, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_zero_syllable_word_is_excess() {
        // Attaching "--" to the last line would fit, but greedy fitting has
        // already closed that line.
        let mut words: Vec<String> = (0..17).map(|i| format!("w{i}")).collect();
        words.push("--".into());
        let err = fit(&words, &LinePattern::haiku(), &one_each).unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::ExcessWords);
    }

    #[test]
    fn test_insufficient_words() {
        let words = ["a", "b", "c", "d", "e", "f"];
        match fit(&words, &LinePattern::haiku(), &one_each).unwrap_err() {
            FitError::InsufficientWords {
                line,
                remaining,
                lines,
            } => {
                assert_eq!(line, 1);
                assert_eq!(remaining, vec![0, 6, 5]);
                assert_eq!(lines, vec!["a b c d e", "f", ""]);
            }
            other => panic!("expected InsufficientWords, got {other:?}"),
        }
    }

    #[test]
    fn test_syllable_overflow() {
        let counter = |w: &str| w.len();
        // 2 + 2 = 4, then 3 overshoots the 5-syllable first line
        let words = ["ab", "cd", "efg", "h"];
        match fit(&words, &LinePattern::haiku(), &counter).unwrap_err() {
            FitError::SyllableOverflow {
                line,
                word,
                remaining,
                lines,
            } => {
                assert_eq!(line, 0);
                assert_eq!(word, "efg");
                assert_eq!(remaining, vec![-2, 7, 5]);
                assert_eq!(lines[0], "ab cd efg");
            }
            other => panic!("expected SyllableOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_overflow_takes_precedence_over_exhaustion() {
        let counter = |w: &str| w.len();
        let words = ["aaaaaa"];
        let err = fit(&words, &LinePattern::haiku(), &counter).unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::SyllableOverflow);
    }

    #[test]
    fn test_zero_syllable_words_join_current_line() {
        let words = ["a", "b", "c", "d", "e", "--", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q"];
        let h = fit(&words, &LinePattern::haiku(), &one_each).unwrap();
        assert_eq!(h.lines()[0], "a b c d e");
        assert_eq!(h.lines()[1], "-- f g h i j k l");
        assert_eq!(h.lines()[2], "m n o p q");
    }

    #[test]
    fn test_lines_are_trimmed() {
        // The empty token from the double space lands at the start of line 2
        let words = tokenize("a b c d e  f g h i j k l m n o p q");
        assert_eq!(words[5], "");
        let h = fit(&words, &LinePattern::haiku(), &one_each).unwrap();
        assert_eq!(
            h.lines(),
            &["a b c d e", "f g h i j k l", "m n o p q"].map(String::from)
        );
        assert_eq!(h.to_string(), "a b c d e\nf g h i j k l\nm n o p q");

        let words = ["a", "b", "c", "d", "e\t", "f", "g", "h", "i", "j", "k", "l\n", "m", "n", "o", "p", "q"];
        let h = fit(&words, &LinePattern::haiku(), &one_each).unwrap();
        for line in h.lines() {
            assert_eq!(line, line.trim());
        }
        assert_eq!(h.lines()[0], "a b c d e");
        assert_eq!(h.lines()[1], "f g h i j k l");
    }

    #[test]
    fn test_failure_lines_are_trimmed() {
        let words = ["a", "b", "c", "d", "e", "", "f"];
        match fit(&words, &LinePattern::haiku(), &one_each).unwrap_err() {
            FitError::InsufficientWords { lines, .. } => {
                assert_eq!(lines, vec!["a b c d e", "f", ""]);
            }
            other => panic!("expected InsufficientWords, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_pattern() {
        let words = ["one", "two", "three"];
        let pattern = LinePattern::new(vec![1, 2]).unwrap();
        let h = fit(&words, &pattern, &one_each).unwrap();
        assert_eq!(h.lines(), &["one".to_string(), "two three".to_string()]);
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let counter = |_: &str| usize::MAX;
        let err = fit(&["x"], &LinePattern::haiku(), &counter).unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::SyllableOverflow);
    }
}
