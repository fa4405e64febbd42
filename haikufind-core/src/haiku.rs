//! The haiku value type

use std::fmt;

use serde::Serialize;

/// A sentence that fits a line pattern
///
/// Lines hold the sentence's words in order, joined by single spaces and
/// trimmed at both ends. A `Haiku` is only produced by [`crate::fit`], so
/// every line meets its syllable target and together the lines use every word
/// of the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Haiku {
    lines: Vec<String>,
}

impl Haiku {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The lines, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Every non-blank word of every line, trimmed, in order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .flat_map(|line| line.split(' '))
            .map(str::trim)
            .filter(|word| !word.is_empty())
    }

    /// The lines joined with newlines, without a trailing newline
    pub fn to_display_string(&self) -> String {
        self.lines.join("\n")
    }

    /// Take the lines out
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Haiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
