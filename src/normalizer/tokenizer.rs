//! Tokenization and punctuation filtering.
//!
//! Splits text into maximal alphanumeric runs and maximal punctuation runs,
//! so punctuation adjacent to a word is its own token rather than part of it.
//! Tokens with no alphanumeric content are discarded; survivors are rejoined
//! with single spaces.

use anyhow::Result;
use regex::Regex;

use crate::normalizer::TransformStage;

pub struct PunctuationFilter {
    token: Regex,
}

impl PunctuationFilter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            token: Regex::new(r"[A-Za-z0-9]+|[^A-Za-z0-9\s]+")?,
        })
    }

    /// Tokenize and keep only word-like tokens: fully alphanumeric, or
    /// carrying at least one digit (punctuation remnants around numbers).
    pub fn tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|t| {
                t.chars().all(|c| c.is_ascii_alphanumeric())
                    || t.chars().any(|c| c.is_ascii_digit())
            })
            .collect()
    }
}

impl TransformStage for PunctuationFilter {
    fn apply(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    fn name(&self) -> &'static str {
        "PunctuationFilter"
    }
}
