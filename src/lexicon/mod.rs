mod loader;
mod merger;
mod oov;

pub use loader::{resolve_first_existing, Lexicon};
pub use merger::{merge_dictionaries, MergeReport};
pub use oov::{find_oov_words, scan_transcripts};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from dictionary resolution and loading. "Not found" is its own
/// variant so callers can tell a missing dictionary (OOV detection cannot
/// proceed) apart from an unreadable one.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("no pronunciation dictionary found, searched: {}", format_paths(.0))]
    DictionaryNotFound(Vec<PathBuf>),

    #[error("dictionary {path} could not be read: {message}")]
    Unreadable { path: PathBuf, message: String },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
