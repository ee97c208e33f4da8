//! Digit-run expansion stage.
//!
//! Rewrites every maximal digit run into uppercase cardinal words. Four-digit
//! year-like numbers split into century and remainder so "1971" reads as
//! "NINETEEN SEVENTY ONE" rather than "ONE THOUSAND NINE HUNDRED SEVENTY ONE".

use anyhow::Result;
use regex::Regex;

use crate::normalizer::TransformStage;

const UNITS: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Largest scale first; covers the full u64 range so expansion is total.
const SCALES: [(&str, u64); 6] = [
    ("quintillion", 1_000_000_000_000_000_000),
    ("quadrillion", 1_000_000_000_000_000),
    ("trillion", 1_000_000_000_000),
    ("billion", 1_000_000_000),
    ("million", 1_000_000),
    ("thousand", 1_000),
];

fn under_thousand(n: u64) -> String {
    debug_assert!(n < 1000);
    if n == 0 {
        return String::new();
    }
    if n < 10 {
        return UNITS[n as usize].to_string();
    }
    if n < 20 {
        return TEENS[(n - 10) as usize].to_string();
    }
    if n < 100 {
        let ten = n / 10;
        let rem = n % 10;
        if rem == 0 {
            return TENS[ten as usize].to_string();
        }
        return format!("{} {}", TENS[ten as usize], UNITS[rem as usize]);
    }
    let hundreds = n / 100;
    let rem = n % 100;
    if rem == 0 {
        format!("{} hundred", UNITS[hundreds as usize])
    } else {
        format!("{} hundred {}", UNITS[hundreds as usize], under_thousand(rem))
    }
}

/// Convert a number to space-separated cardinal words, no hyphens, no "and".
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut parts = Vec::new();
    let mut remaining = n;

    for (scale_word, scale) in SCALES {
        let count = remaining / scale;
        remaining %= scale;
        if count > 0 {
            parts.push(format!("{} {}", number_to_words(count), scale_word));
        }
    }

    if remaining > 0 {
        parts.push(under_thousand(remaining));
    }

    parts.join(" ")
}

/// Expands digit runs to uppercase words, with year splitting for 4-digit
/// runs in [1000, 2099].
pub struct NumberExpansion {
    digit_run: Regex,
}

impl NumberExpansion {
    pub fn new() -> Result<Self> {
        Ok(Self {
            digit_run: Regex::new(r"\b\d+\b")?,
        })
    }

    fn expand_run(num_str: &str) -> String {
        // A run too long for u64 is left in place; expansion failure must
        // never abort the transcript.
        let value: u64 = match num_str.parse() {
            Ok(v) => v,
            Err(_) => return num_str.to_string(),
        };

        let words = if num_str.len() == 4 && (1000..=2099).contains(&value) {
            let century = value / 100;
            let remainder = value % 100;
            if remainder == 0 {
                format!("{} hundred", number_to_words(century))
            } else {
                format!("{} {}", number_to_words(century), number_to_words(remainder))
            }
        } else {
            number_to_words(value)
        };

        words.to_uppercase()
    }
}

impl TransformStage for NumberExpansion {
    fn apply(&self, text: &str) -> String {
        self.digit_run
            .replace_all(text, |caps: &regex::Captures| Self::expand_run(&caps[0]))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "NumberExpansion"
    }
}
