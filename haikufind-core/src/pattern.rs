//! Per-line syllable targets

use std::fmt;

use crate::error::PatternError;

/// Syllable targets of the canonical haiku
pub const HAIKU_TARGETS: [usize; 3] = [5, 7, 5];

/// Validated sequence of per-line syllable targets
///
/// Always non-empty with every target above zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinePattern {
    targets: Vec<usize>,
}

impl LinePattern {
    /// The 5-7-5 haiku pattern
    pub fn haiku() -> Self {
        Self {
            targets: HAIKU_TARGETS.to_vec(),
        }
    }

    /// Build a pattern from arbitrary targets
    pub fn new(targets: impl Into<Vec<usize>>) -> Result<Self, PatternError> {
        let targets = targets.into();
        if targets.is_empty() {
            return Err(PatternError::Empty);
        }
        if let Some(line) = targets.iter().position(|&t| t == 0) {
            return Err(PatternError::ZeroTarget { line });
        }
        Ok(Self { targets })
    }

    /// Per-line targets, top to bottom
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the pattern has no lines
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Syllables across all lines, saturating at `usize::MAX`
    pub fn total_syllables(&self) -> usize {
        self.targets
            .iter()
            .fold(0usize, |total, &t| total.saturating_add(t))
    }
}

impl Default for LinePattern {
    fn default() -> Self {
        Self::haiku()
    }
}

impl TryFrom<Vec<usize>> for LinePattern {
    type Error = PatternError;

    fn try_from(targets: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(targets)
    }
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.targets.iter().map(usize::to_string).collect();
        write!(f, "{}", parts.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_haiku() {
        let p = LinePattern::default();
        assert_eq!(p.targets(), &[5, 7, 5]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.total_syllables(), 17);
        assert_eq!(p.to_string(), "5-7-5");
    }

    #[test]
    fn test_custom_pattern() {
        // Tanka
        let p = LinePattern::new(vec![5, 7, 5, 7, 7]).unwrap();
        assert_eq!(p.len(), 5);
        assert_eq!(p.total_syllables(), 31);
    }

    #[test]
    fn test_total_saturates() {
        let p = LinePattern::new(vec![usize::MAX, 1]).unwrap();
        assert_eq!(p.total_syllables(), usize::MAX);
    }

    #[test]
    fn test_invalid_patterns() {
        assert_eq!(LinePattern::new(Vec::new()), Err(PatternError::Empty));
        assert_eq!(
            LinePattern::try_from(vec![5, 0, 5]),
            Err(PatternError::ZeroTarget { line: 1 })
        );
    }
}
