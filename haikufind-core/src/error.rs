//! Error types for haiku matching
//!
//! Every failure here is an expected outcome of matching a sentence, not a
//! fault. Callers that only want haiku (see [`crate::find`]) discard them;
//! direct callers of the line-fitter get the classification and the state the
//! fitter was in when it gave up.

use thiserror::Error;

/// Why a sentence could not be fitted to a line pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    /// Tokenizing the sentence produced no words
    #[error("sentence has 0 words")]
    EmptySentence,

    /// Words ran out before every line reached its syllable target
    #[error("not a haiku - ran out of words at line {line}, remaining: {remaining:?}, lines: {lines:?}")]
    InsufficientWords {
        /// Index of the line that was still being filled
        line: usize,
        /// Remaining syllable budget per line
        remaining: Vec<i64>,
        /// Lines accumulated so far
        lines: Vec<String>,
    },

    /// Every line was filled exactly but words were left over
    #[error("not a haiku - too many words, {unconsumed} left over, lines: {lines:?}")]
    ExcessWords {
        /// Number of words that were never placed on a line
        unconsumed: usize,
        /// The completed lines
        lines: Vec<String>,
    },

    /// A word pushed a line past its syllable target
    #[error("not a haiku - '{word}' overflows line {line}, remaining: {remaining:?}, lines: {lines:?}")]
    SyllableOverflow {
        /// Index of the overflowing line
        line: usize,
        /// The word that caused the overflow
        word: String,
        /// Remaining syllable budget per line, including the negative entry
        remaining: Vec<i64>,
        /// Lines accumulated so far, including the overflowing word
        lines: Vec<String>,
    },
}

impl FitError {
    /// Short, stable name of the failure class
    pub fn kind(&self) -> FitErrorKind {
        match self {
            FitError::EmptySentence => FitErrorKind::EmptySentence,
            FitError::InsufficientWords { .. } => FitErrorKind::InsufficientWords,
            FitError::ExcessWords { .. } => FitErrorKind::ExcessWords,
            FitError::SyllableOverflow { .. } => FitErrorKind::SyllableOverflow,
        }
    }
}

/// Failure classification without the diagnostic payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitErrorKind {
    /// See [`FitError::EmptySentence`]
    EmptySentence,
    /// See [`FitError::InsufficientWords`]
    InsufficientWords,
    /// See [`FitError::ExcessWords`]
    ExcessWords,
    /// See [`FitError::SyllableOverflow`]
    SyllableOverflow,
}

/// Invalid line pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A pattern needs at least one line
    #[error("line pattern must contain at least one line")]
    Empty,

    /// Targets must be positive
    #[error("line {line} has a syllable target of 0")]
    ZeroTarget {
        /// Index of the offending line
        line: usize,
    },
}

/// Result type for fitting operations
pub type FitResult<T> = std::result::Result<T, FitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FitError::EmptySentence.to_string(), "sentence has 0 words");

        let err = FitError::ExcessWords {
            unconsumed: 2,
            lines: vec!["a".into(), "b".into(), "c".into()],
        };
        assert!(err.to_string().starts_with("not a haiku - too many words"));
    }

    #[test]
    fn test_kind() {
        let err = FitError::SyllableOverflow {
            line: 1,
            word: "banana".into(),
            remaining: vec![0, -1, 5],
            lines: vec!["x".into(), "banana".into(), String::new()],
        };
        assert_eq!(err.kind(), FitErrorKind::SyllableOverflow);
        assert_eq!(FitError::EmptySentence.kind(), FitErrorKind::EmptySentence);
    }
}
