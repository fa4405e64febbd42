//! Per-sentence outcomes

use haikufind_core::{FitErrorKind, FitResult, Haiku};

/// What happened to one sentence of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceReport {
    /// Position of the sentence in the input, from 0
    pub index: usize,
    /// The sentence as segmented (trimmed, punctuation intact)
    pub sentence: String,
    /// The haiku, or why the sentence is not one
    pub outcome: FitResult<Haiku>,
}

impl SentenceReport {
    /// Whether the sentence fitted
    pub fn is_haiku(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The haiku, if the sentence fitted
    pub fn haiku(&self) -> Option<&Haiku> {
        self.outcome.as_ref().ok()
    }

    /// Failure classification, if the sentence did not fit
    pub fn failure(&self) -> Option<FitErrorKind> {
        self.outcome.as_ref().err().map(|e| e.kind())
    }

    /// Consume the report, keeping only the haiku
    pub fn into_haiku(self) -> Option<Haiku> {
        self.outcome.ok()
    }
}
