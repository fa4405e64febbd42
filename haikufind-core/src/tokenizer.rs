//! Word tokenization
//!
//! Only the two ends of the sentence are cleaned: inner punctuation and digits
//! stay attached to their words (`"$4.50,"` is one token).

use std::sync::OnceLock;

use regex::Regex;

static OUTER_NON_LETTERS: OnceLock<Regex> = OnceLock::new();

/// Leading or trailing run of characters outside Unicode category L
fn outer_non_letters() -> &'static Regex {
    OUTER_NON_LETTERS
        .get_or_init(|| Regex::new(r"^\P{L}+|\P{L}+$").expect("edge pattern is valid"))
}

/// Split a sentence into lowercase words
///
/// Leading and trailing characters that are not letters are stripped from the
/// whole sentence, then the rest is split on single ASCII spaces. Returns an
/// empty vector when nothing is left after stripping.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    let core = outer_non_letters().replace_all(&lowered, "");
    if core.is_empty() {
        return Vec::new();
    }
    core.split(' ').map(str::to_owned).collect()
}
