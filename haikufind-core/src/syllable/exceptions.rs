//! Exception table for the English counter
//!
//! The table ships as TOML inside the binary and is parsed on first use.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Words whose syllable count is looked up instead of computed
pub type ExceptionTable = HashMap<String, usize>;

/// Root of the exceptions TOML document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ExceptionsConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub exceptions: ExceptionTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Metadata {
    pub code: String,
    pub name: String,
}

static EMBEDDED: OnceLock<Arc<ExceptionTable>> = OnceLock::new();
static NON_LETTERS: OnceLock<Regex> = OnceLock::new();

/// The built-in English exception table
pub fn embedded_exceptions() -> Arc<ExceptionTable> {
    EMBEDDED
        .get_or_init(|| {
            match parse_exceptions(include_str!("../../configs/english_exceptions.toml")) {
                Ok(config) => {
                    log::debug!(
                        "loaded {} syllable exceptions ({})",
                        config.exceptions.len(),
                        config.metadata.name
                    );
                    Arc::new(config.exceptions)
                }
                Err(e) => {
                    log::warn!("failed to load embedded syllable exceptions: {e}");
                    Arc::new(ExceptionTable::new())
                }
            }
        })
        .clone()
}

/// Parse an exceptions document, normalising keys to lowercase letters
pub(crate) fn parse_exceptions(toml_str: &str) -> Result<ExceptionsConfig, toml::de::Error> {
    let mut config: ExceptionsConfig = toml::from_str(toml_str)?;
    config.exceptions = config
        .exceptions
        .into_iter()
        .map(|(word, count)| (normalize(&word), count))
        .collect();
    Ok(config)
}

/// Lowercase letters only, the form the counter looks words up by
pub(crate) fn normalize(word: &str) -> String {
    let non_letters =
        NON_LETTERS.get_or_init(|| Regex::new(r"\P{L}+").expect("letter pattern is valid"));
    non_letters.replace_all(word, "").to_lowercase()
}
