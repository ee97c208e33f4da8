//! Line, hyphen and whitespace layout stages.
//!
//! These run at the edges of the pipeline: line joining and hyphen handling
//! before any expansion (digit runs must still be delimited by their original
//! separators), casing and whitespace collapse at the very end.

use anyhow::Result;
use regex::Regex;

use crate::normalizer::TransformStage;

/// Collapses embedded line breaks into single spaces, so a multi-line
/// transcript becomes one line.
pub struct LineJoin;

impl TransformStage for LineJoin {
    fn apply(&self, text: &str) -> String {
        text.lines().collect::<Vec<_>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "LineJoin"
    }
}

/// Removes hyphens used as pause/dash punctuation. A hyphen with whitespace
/// on either side is a sentence-break dash, not a compound-word hyphen.
pub struct DashStrip {
    trailing_space: Regex,
    leading_space: Regex,
}

impl DashStrip {
    pub fn new() -> Result<Self> {
        Ok(Self {
            trailing_space: Regex::new(r"\s*-\s+")?,
            leading_space: Regex::new(r"\s+-\s*")?,
        })
    }
}

impl TransformStage for DashStrip {
    fn apply(&self, text: &str) -> String {
        let text = self.trailing_space.replace_all(text, " ");
        self.leading_space.replace_all(&text, " ").into_owned()
    }

    fn name(&self) -> &'static str {
        "DashStrip"
    }
}

/// Splits genuine compound words: a hyphen directly joining two alphanumeric
/// characters becomes a space, so "well-known" tokenizes as two words.
pub struct CompoundSplit {
    compound: Regex,
}

impl CompoundSplit {
    pub fn new() -> Result<Self> {
        Ok(Self {
            compound: Regex::new(r"([A-Za-z0-9])-([A-Za-z0-9])")?,
        })
    }
}

impl TransformStage for CompoundSplit {
    fn apply(&self, text: &str) -> String {
        self.compound.replace_all(text, "$1 $2").into_owned()
    }

    fn name(&self) -> &'static str {
        "CompoundSplit"
    }
}

/// Uppercases the entire text.
pub struct Uppercase;

impl TransformStage for Uppercase {
    fn apply(&self, text: &str) -> String {
        text.to_uppercase()
    }

    fn name(&self) -> &'static str {
        "Uppercase"
    }
}

/// Collapses any run of whitespace to a single space and trims the ends.
pub struct WhitespaceCollapse {
    runs: Regex,
}

impl WhitespaceCollapse {
    pub fn new() -> Result<Self> {
        Ok(Self {
            runs: Regex::new(r"\s+")?,
        })
    }
}

impl TransformStage for WhitespaceCollapse {
    fn apply(&self, text: &str) -> String {
        self.runs.replace_all(text, " ").trim().to_string()
    }

    fn name(&self) -> &'static str {
        "WhitespaceCollapse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_join() {
        assert_eq!(LineJoin.apply("one\ntwo\nthree"), "one two three");
        assert_eq!(LineJoin.apply("single line"), "single line");
    }

    #[test]
    fn test_dash_strip_pause_dash() {
        let stage = DashStrip::new().unwrap();
        assert_eq!(stage.apply("wait - really"), "wait really");
        assert_eq!(stage.apply("trailing- word"), "trailing word");
        assert_eq!(stage.apply("word -leading"), "word leading");
    }

    #[test]
    fn test_dash_strip_keeps_compound_hyphen() {
        let stage = DashStrip::new().unwrap();
        assert_eq!(stage.apply("well-known"), "well-known");
    }

    #[test]
    fn test_compound_split() {
        let stage = CompoundSplit::new().unwrap();
        assert_eq!(stage.apply("well-known"), "well known");
        assert_eq!(stage.apply("mid-1970"), "mid 1970");
    }

    #[test]
    fn test_whitespace_collapse() {
        let stage = WhitespaceCollapse::new().unwrap();
        assert_eq!(stage.apply("  a   b\t c  "), "a b c");
    }
}
