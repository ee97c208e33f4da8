//! Merges the curated custom dictionary over the base dictionary.
//!
//! Custom entries win on conflicting words. The merged file is written
//! sorted by word, one `WORD<TAB>PRONUNCIATION` line per word regardless
//! of which source the entry came from. Both inputs are read fully before
//! the output file is touched.

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub struct MergeReport {
    pub base_entries: usize,
    pub custom_entries: usize,
    pub total_entries: usize,
}

/// Split a dictionary line into word and pronunciation. The word is the
/// first tab- or whitespace-delimited field; everything after it is the
/// pronunciation encoding. Lines with fewer than two fields yield None.
fn split_entry(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    let (word, pron) = match line.split_once('\t') {
        Some((word, pron)) => (word, pron),
        None => line.split_once(char::is_whitespace)?,
    };

    let word = word.trim();
    let pron = pron.trim();
    if word.is_empty() || pron.is_empty() {
        return None;
    }

    Some((word.to_uppercase(), pron.to_string()))
}

/// Merge `base` and `custom` into `output`. Fatal if either input is
/// missing; this tool has no partial mode.
pub fn merge_dictionaries(base: &Path, custom: &Path, output: &Path) -> Result<MergeReport> {
    if !base.exists() {
        bail!("Base dictionary not found: {}", base.display());
    }
    if !custom.exists() {
        bail!("Custom dictionary not found: {}", custom.display());
    }

    let base_content = std::fs::read_to_string(base)
        .with_context(|| format!("Failed to read base dictionary {}", base.display()))?;
    let custom_content = std::fs::read_to_string(custom)
        .with_context(|| format!("Failed to read custom dictionary {}", custom.display()))?;

    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    let mut base_entries = 0;
    for line in base_content.lines() {
        if let Some((word, pron)) = split_entry(line) {
            merged.insert(word, pron);
            base_entries += 1;
        }
    }
    info!("Base dictionary: {} entries", base_entries);

    let mut custom_entries = 0;
    for line in custom_content.lines() {
        if let Some((word, pron)) = split_entry(line) {
            debug!("Adding custom entry {}", word);
            merged.insert(word, pron);
            custom_entries += 1;
        }
    }

    let mut out = String::new();
    for (word, pron) in &merged {
        out.push_str(word);
        out.push('\t');
        out.push_str(pron);
        out.push('\n');
    }

    std::fs::write(output, out)
        .with_context(|| format!("Failed to write merged dictionary {}", output.display()))?;

    let report = MergeReport {
        base_entries,
        custom_entries,
        total_entries: merged.len(),
    };
    info!(
        "Merged {} custom entries over {} base entries, {} total, saved to {}",
        report.custom_entries,
        report.base_entries,
        report.total_entries,
        output.display()
    );

    Ok(report)
}
