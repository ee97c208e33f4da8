//! The transcript normalization pipeline.
//!
//! An explicit ordered list of transform stages, applied in sequence. The
//! ordering is load-bearing: hyphen handling must precede the expanders
//! (digit runs are still delimited by original separators), the expanders
//! must precede punctuation stripping (they depend on `'` and `.`), and
//! possessive expansion must precede abbreviation expansion.

use anyhow::Result;
use tracing::debug;

use crate::normalizer::{
    AbbreviationExpansion, CompoundSplit, DashStrip, LineJoin, NumberExpansion,
    PossessiveExpansion, PunctuationFilter, TransformStage, Uppercase, WhitespaceCollapse,
};

pub struct TranscriptPipeline {
    stages: Vec<Box<dyn TransformStage>>,
}

impl TranscriptPipeline {
    /// Build the pipeline, compiling every stage's regexes up front.
    ///
    /// Construction happens once at handler start; no stage acquires
    /// resources lazily mid-run.
    pub fn new() -> Result<Self> {
        let stages: Vec<Box<dyn TransformStage>> = vec![
            Box::new(LineJoin),
            Box::new(DashStrip::new()?),
            Box::new(CompoundSplit::new()?),
            Box::new(PossessiveExpansion::new()?),
            Box::new(AbbreviationExpansion::new()?),
            Box::new(NumberExpansion::new()?),
            Box::new(PunctuationFilter::new()?),
            Box::new(Uppercase),
            Box::new(WhitespaceCollapse::new()?),
        ];

        Ok(Self { stages })
    }

    /// Normalize raw transcript text into canonical uppercase tokens.
    ///
    /// Total function: no input text produces an error. Fragments a stage
    /// cannot rewrite are carried through unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();
        for stage in &self.stages {
            current = stage.apply(&current);
            debug!("{}: {} chars", stage.name(), current.len());
        }
        current
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> TranscriptPipeline {
        TranscriptPipeline::new().unwrap()
    }

    #[test]
    fn test_stage_order_is_pinned() {
        assert_eq!(
            pipeline().stage_names(),
            vec![
                "LineJoin",
                "DashStrip",
                "CompoundSplit",
                "PossessiveExpansion",
                "AbbreviationExpansion",
                "NumberExpansion",
                "PunctuationFilter",
                "Uppercase",
                "WhitespaceCollapse",
            ]
        );
    }

    #[test]
    fn test_full_sentence() {
        let p = pipeline();
        assert_eq!(
            p.normalize("In 1971, WBUR's reporters covered the S.J.C. ruling."),
            "IN NINETEEN SEVENTY ONE WBUR S REPORTERS COVERED THE S J C RULING"
        );
    }

    #[test]
    fn test_multiline_becomes_one_line() {
        let p = pipeline();
        assert_eq!(p.normalize("first line\nsecond line"), "FIRST LINE SECOND LINE");
    }

    #[test]
    fn test_compound_hyphen_splits() {
        let p = pipeline();
        assert_eq!(p.normalize("a well-known voice"), "A WELL KNOWN VOICE");
    }

    #[test]
    fn test_pause_dash_collapses() {
        let p = pipeline();
        assert_eq!(p.normalize("wait - really"), "WAIT REALLY");
    }

    #[test]
    fn test_dotted_abbreviation_with_possessive() {
        let p = pipeline();
        assert_eq!(p.normalize("W.B.U.R.'s newsroom"), "W B U R S NEWSROOM");
    }

    #[test]
    fn test_years() {
        let p = pipeline();
        assert_eq!(p.normalize("1900"), "NINETEEN HUNDRED");
        assert_eq!(p.normalize("2005"), "TWENTY FIVE");
        assert_eq!(p.normalize("2500"), "TWO THOUSAND FIVE HUNDRED");
    }

    #[test]
    fn test_determinism() {
        let p = pipeline();
        let input = "Mixed CASE, numbers 42 and 1984 - with punctuation!";
        assert_eq!(p.normalize(input), p.normalize(input));
    }

    #[test]
    fn test_idempotence() {
        let p = pipeline();
        let inputs = [
            "In 1971, WBUR's reporters covered the S.J.C. ruling.",
            "a well-known voice - speaking\nacross two lines",
            "plain text already",
        ];
        for input in inputs {
            let once = p.normalize(input);
            assert_eq!(p.normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_no_empty_output_artifacts() {
        let p = pipeline();
        assert_eq!(p.normalize(""), "");
        assert_eq!(p.normalize("...!?"), "");
        assert_eq!(p.normalize("   "), "");
    }

    #[test]
    fn test_output_shape_invariant() {
        let p = pipeline();
        let out = p.normalize("Some text; with 3 tokens?! and W.B.U.R.'s dash - here");
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
        assert!(!out.contains("  "));
        for token in out.split(' ') {
            assert!(
                token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "bad token {token:?} in {out:?}"
            );
        }
    }
}
