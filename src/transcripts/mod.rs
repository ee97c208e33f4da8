//! Transcript file orchestration: loading raw transcripts from a directory
//! and writing normalized output alongside the same filenames.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One transcript file: its filename and free text content. Read-only input.
#[derive(Debug, Clone)]
pub struct RawTranscript {
    pub name: String,
    pub text: String,
}

fn is_transcript(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("txt")
    )
}

/// Load every `.txt`/`.TXT` file in a directory, sorted by filename so runs
/// process files in a stable order. Content is read as UTF-8, lossily.
pub fn load_dir(dir: &Path) -> Result<Vec<RawTranscript>> {
    if !dir.is_dir() {
        bail!("Transcript directory not found: {}", dir.display());
    }

    let mut transcripts = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_transcript(path) {
            continue;
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read transcript {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let name = entry.file_name().to_string_lossy().into_owned();

        debug!("Loaded transcript {} ({} bytes)", name, text.len());
        transcripts.push(RawTranscript { name, text });
    }

    Ok(transcripts)
}

/// Write one normalized transcript under the same filename in `output_dir`,
/// creating the directory if needed. Returns the written path.
pub fn write_normalized(output_dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let path = output_dir.join(name);
    std::fs::write(&path, text)
        .with_context(|| format!("Failed to write normalized transcript {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_dir_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), "second").unwrap();
        std::fs::write(dir.path().join("A.TXT"), "first").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        std::fs::write(dir.path().join("audio.wav"), [0u8; 4]).unwrap();

        let transcripts = load_dir(dir.path()).unwrap();
        let names: Vec<&str> = transcripts.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A.TXT", "b.txt"]);
        assert_eq!(transcripts[0].text, "first");
    }

    #[test]
    fn test_load_dir_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.txt"), "deep").unwrap();
        std::fs::write(dir.path().join("top.txt"), "top").unwrap();

        let transcripts = load_dir(dir.path()).unwrap();
        assert_eq!(transcripts.len(), 1);
        assert_eq!(transcripts[0].name, "top.txt");
    }

    #[test]
    fn test_load_dir_missing() {
        assert!(load_dir(Path::new("/nonexistent/transcripts")).is_err());
    }

    #[test]
    fn test_write_normalized_creates_dir() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("out");
        let path = write_normalized(&out_dir, "P1.TXT", "HELLO WORLD").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "HELLO WORLD");
    }
}
