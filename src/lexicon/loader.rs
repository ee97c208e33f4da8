//! Pronunciation dictionary loading.
//!
//! A dictionary is a line-oriented file whose first whitespace-delimited
//! field is the word; the rest of the line is the pronunciation encoding,
//! carried through opaquely and never parsed for phonetic content.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::lexicon::LexiconError;

#[derive(Debug)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Load a dictionary file. Blank lines and lines with no fields are
    /// skipped; a later line for the same word overwrites the earlier one.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;

        let mut entries = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            let Some(word) = line.split_whitespace().next() else {
                continue;
            };
            entries.insert(word.to_uppercase(), line.to_string());
        }

        debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Resolve the dictionary through an ordered search-path list and load
    /// the first existing candidate.
    pub fn find_and_load(search_paths: &[PathBuf]) -> Result<Self, LexiconError> {
        let path = resolve_first_existing(search_paths)
            .ok_or_else(|| LexiconError::DictionaryNotFound(search_paths.to_vec()))?;

        info!("Using dictionary {}", path.display());
        Self::load(&path).map_err(|source| LexiconError::Unreadable {
            path,
            message: source.to_string(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The stored dictionary line for a word, if present.
    pub fn line(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First existing path among an ordered candidate list.
pub fn resolve_first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}
