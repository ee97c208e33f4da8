//! Possessive and dotted-abbreviation expansion stages.
//!
//! Both rewrites depend on `'` and `.` still being present, so they run
//! before punctuation is stripped. Possessive expansion must run first:
//! "WBUR's" detaches its suffix here, while "W.B.U.R.'s" is left for the
//! abbreviation stage, whose letter extraction picks up the trailing s.

use anyhow::Result;
use regex::Regex;

use crate::normalizer::TransformStage;

/// Rewrites possessives into an explicit trailing S token: "WBUR's" -> "WBUR S".
pub struct PossessiveExpansion {
    possessive: Regex,
}

impl PossessiveExpansion {
    pub fn new() -> Result<Self> {
        Ok(Self {
            possessive: Regex::new(r"\b([A-Za-z0-9]+)'s\b")?,
        })
    }
}

impl TransformStage for PossessiveExpansion {
    fn apply(&self, text: &str) -> String {
        self.possessive.replace_all(text, "$1 S").into_owned()
    }

    fn name(&self) -> &'static str {
        "PossessiveExpansion"
    }
}

/// Rewrites dotted initialisms into space-separated letters:
/// "S.J.C." -> "S J C", "W.B.U.R.'s" -> "W B U R s".
pub struct AbbreviationExpansion {
    abbreviation: Regex,
}

impl AbbreviationExpansion {
    pub fn new() -> Result<Self> {
        // A run of single letters each followed by a period, an optional
        // trailing period, and an optional possessive suffix.
        Ok(Self {
            abbreviation: Regex::new(r"\b(?:[A-Za-z]\.)+[A-Za-z]\.?(?:'s)?")?,
        })
    }
}

impl TransformStage for AbbreviationExpansion {
    fn apply(&self, text: &str) -> String {
        self.abbreviation
            .replace_all(text, |caps: &regex::Captures| {
                let letters: Vec<String> = caps[0]
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .map(|c| c.to_string())
                    .collect();
                letters.join(" ")
            })
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "AbbreviationExpansion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possessive_basic() {
        let stage = PossessiveExpansion::new().unwrap();
        assert_eq!(stage.apply("WBUR's signal"), "WBUR S signal");
        assert_eq!(stage.apply("the dog's bone"), "the dog S bone");
    }

    #[test]
    fn test_possessive_skips_dotted_abbreviation() {
        // The character before the apostrophe is a period, so the possessive
        // pattern must not fire; the abbreviation stage owns this case.
        let stage = PossessiveExpansion::new().unwrap();
        assert_eq!(stage.apply("W.B.U.R.'s signal"), "W.B.U.R.'s signal");
    }

    #[test]
    fn test_abbreviation_trailing_period() {
        let stage = AbbreviationExpansion::new().unwrap();
        assert_eq!(stage.apply("the S.J.C. ruled"), "the S J C ruled");
    }

    #[test]
    fn test_abbreviation_no_trailing_period() {
        let stage = AbbreviationExpansion::new().unwrap();
        assert_eq!(stage.apply("the S.J.C ruled"), "the S J C ruled");
    }

    #[test]
    fn test_abbreviation_with_possessive_suffix() {
        let stage = AbbreviationExpansion::new().unwrap();
        assert_eq!(stage.apply("W.B.U.R.'s newsroom"), "W B U R s newsroom");
    }

    #[test]
    fn test_single_letter_not_an_abbreviation() {
        // A lone "A." is the end of a sentence, not an initialism.
        let stage = AbbreviationExpansion::new().unwrap();
        assert_eq!(stage.apply("plan A. Next"), "plan A. Next");
    }
}
