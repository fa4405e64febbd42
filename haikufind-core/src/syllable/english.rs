//! Vowel-group syllable heuristic for English

use std::sync::Arc;

use super::exceptions::{embedded_exceptions, normalize, ExceptionTable};
use super::SyllableCounter;

/// Heuristic English syllable counter
///
/// Counts groups of vowels, then corrects for silent endings (`-e`, `-es`,
/// `-ed`) and for a vowel directly before `-ing`. Words the rules get wrong
/// are looked up in an exception table first. Everything but letters is
/// ignored, so `"hammer,"` counts like `"hammer"` and `"-"` counts as zero.
#[derive(Debug, Clone)]
pub struct EnglishSyllableCounter {
    exceptions: Arc<ExceptionTable>,
    overrides: ExceptionTable,
}

impl EnglishSyllableCounter {
    /// Counter backed by the built-in exception table
    pub fn new() -> Self {
        Self {
            exceptions: embedded_exceptions(),
            overrides: ExceptionTable::new(),
        }
    }

    /// Counter with extra exceptions layered over the built-in ones
    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let overrides = overrides
            .into_iter()
            .map(|(word, count)| (normalize(word.as_ref()), count))
            .collect();
        Self {
            exceptions: embedded_exceptions(),
            overrides,
        }
    }

    fn lookup(&self, word: &str) -> Option<usize> {
        self.overrides
            .get(word)
            .or_else(|| self.exceptions.get(word))
            .copied()
    }
}

impl Default for EnglishSyllableCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllableCounter for EnglishSyllableCounter {
    fn count(&self, word: &str) -> usize {
        let word = normalize(word);
        if word.is_empty() {
            return 0;
        }
        if let Some(count) = self.lookup(&word) {
            return count;
        }
        heuristic_count(&word)
    }
}

#[inline]
fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether `chars[i]` starts or continues a vowel sound
fn is_vowel_sound(chars: &[char], i: usize) -> bool {
    match chars[i] {
        // "qu" is a consonant cluster
        'u' => i == 0 || chars[i - 1] != 'q',
        // "y" is a consonant word-initially and before a vowel
        'y' => i > 0 && !chars.get(i + 1).copied().is_some_and(is_vowel),
        ch => is_vowel(ch),
    }
}

/// Consonant followed by "l" at `i`, as in "table" or "simples"
fn is_consonant_le(chars: &[char], i: usize) -> bool {
    chars[i] == 'l' && i > 0 && !is_vowel(chars[i - 1])
}

/// Count syllables of a lowercase, letters-only word
fn heuristic_count(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n <= 3 {
        return 1;
    }

    let mut count: isize = 0;
    let mut in_group = false;
    for i in 0..n {
        let vowel = is_vowel_sound(&chars, i);
        if vowel && !in_group {
            count += 1;
        }
        in_group = vowel;
    }

    if word.ends_with('e') {
        let prev = n - 2;
        if !is_vowel(chars[prev]) && !is_consonant_le(&chars, prev) {
            count -= 1;
        }
    } else if word.ends_with("es") {
        let prev = n - 3;
        let sibilant = matches!(chars[prev], 's' | 'x' | 'z')
            || ["ches", "shes", "ges", "ces"]
                .iter()
                .any(|suffix| word.ends_with(suffix));
        if !is_vowel(chars[prev]) && !sibilant && !is_consonant_le(&chars, prev) {
            count -= 1;
        }
    } else if word.ends_with("ed") {
        let prev = n - 3;
        if !is_vowel(chars[prev]) && !matches!(chars[prev], 't' | 'd') {
            count -= 1;
        }
    }

    if n >= 5 && word.ends_with("ing") && is_vowel(chars[n - 4]) {
        count += 1;
    }

    count.max(1) as usize
}
