//! Out-of-vocabulary detection.
//!
//! Collects the normalized transcript tokens that have no entry in the
//! loaded lexicon. Accumulation is a set union, so the order transcripts
//! are scanned in never changes the result.

use std::collections::BTreeSet;

use crate::lexicon::Lexicon;
use crate::transcripts::RawTranscript;
use tracing::info;

/// Distinct tokens absent from the lexicon, sorted alphabetically.
pub fn find_oov_words<'a, I>(tokens: I, lexicon: &Lexicon) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let oov: BTreeSet<String> = tokens
        .into_iter()
        .filter(|t| !t.is_empty() && !lexicon.contains(t))
        .map(str::to_string)
        .collect();

    oov.into_iter().collect()
}

/// Scan a batch of normalized transcripts, reporting OOV words per file,
/// and return the combined sorted set.
pub fn scan_transcripts(transcripts: &[RawTranscript], lexicon: &Lexicon) -> Vec<String> {
    let mut combined = BTreeSet::new();

    for transcript in transcripts {
        let oov = find_oov_words(transcript.text.split_whitespace(), lexicon);
        if oov.is_empty() {
            info!("{}: no OOV words", transcript.name);
        } else {
            info!("{}: OOV words: {}", transcript.name, oov.join(", "));
        }
        combined.extend(oov);
    }

    combined.into_iter().collect()
}
