//! Best-effort pronunciation generation for OOV words.
//!
//! The generator is an external process behind a narrow capability trait.
//! Whatever goes wrong (binary missing, model missing, non-zero exit,
//! timeout, unparsable output) the adapter returns an empty map and the
//! batch continues; generated pronunciations are advisory, never trusted
//! into the lexicon automatically.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use which::which;

use crate::config::G2pConfig;

/// Capability: turn a word list into word -> pronunciation pairs within a
/// bounded timeout. Implementations must not fail; an empty map is the
/// failure signal.
#[async_trait]
pub trait G2pBackend: Send + Sync {
    async fn generate(&self, words: &[String], timeout: Duration) -> HashMap<String, String>;

    /// Get the name of this backend for logging
    fn name(&self) -> &'static str;
}

/// Backend invoking the Montreal Forced Aligner's `g2p` subcommand with a
/// temp-file handoff.
pub struct MfaG2p {
    command: String,
    model_name: String,
}

impl MfaG2p {
    /// Detect an available MFA G2P setup: the executable on PATH and a model
    /// archive at one of the configured search paths. Returns None (with a
    /// warning naming the remedy) when either is missing.
    pub fn detect(config: &G2pConfig, model_search_paths: &[PathBuf]) -> Option<Self> {
        if which(&config.command).is_err() {
            warn!(
                "{} executable not found in PATH, skipping automatic g2p",
                config.command
            );
            return None;
        }

        let Some(model_path) = model_search_paths.iter().find(|p| p.exists()).cloned() else {
            warn!(
                "g2p model not found, download it with: {} model download g2p {}",
                config.command, config.model_name
            );
            return None;
        };

        info!("Using g2p model {}", model_path.display());
        Some(Self {
            command: config.command.clone(),
            model_name: config.model_name.clone(),
        })
    }

    fn write_word_list(words: &[String]) -> std::io::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile()?;
        for word in words {
            writeln!(file, "{}", word)?;
        }
        file.flush()?;
        Ok(file)
    }

    fn parse_output(content: &str) -> HashMap<String, String> {
        let mut pronunciations = HashMap::new();
        for line in content.lines() {
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else { continue };
            let pron: Vec<&str> = fields.collect();
            if pron.is_empty() {
                continue;
            }
            pronunciations.insert(word.to_uppercase(), pron.join(" "));
        }
        pronunciations
    }
}

#[async_trait]
impl G2pBackend for MfaG2p {
    async fn generate(&self, words: &[String], timeout: Duration) -> HashMap<String, String> {
        if words.is_empty() {
            return HashMap::new();
        }

        // Temp files are removed on drop, on every exit path.
        let input = match Self::write_word_list(words) {
            Ok(file) => file,
            Err(err) => {
                warn!("Failed to write g2p word list: {}", err);
                return HashMap::new();
            }
        };
        let output = match tempfile::Builder::new().suffix(".dict").tempfile() {
            Ok(file) => file,
            Err(err) => {
                warn!("Failed to create g2p output file: {}", err);
                return HashMap::new();
            }
        };

        info!(
            "Generating pronunciations for {} words (timeout {}s)",
            words.len(),
            timeout.as_secs()
        );

        let child = tokio::process::Command::new(&self.command)
            .arg("g2p")
            .arg("--overwrite")
            .arg(input.path())
            .arg(&self.model_name)
            .arg(output.path())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(err) => {
                warn!("Failed to spawn {}: {}", self.command, err);
                return HashMap::new();
            }
        };

        // One attempt, bounded; kill_on_drop reaps the process on timeout.
        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(result)) if result.status.success() => {
                match std::fs::read_to_string(output.path()) {
                    Ok(content) if !content.trim().is_empty() => {
                        let pronunciations = Self::parse_output(&content);
                        info!("Generated {} pronunciations", pronunciations.len());
                        pronunciations
                    }
                    Ok(_) => {
                        warn!("g2p produced no output");
                        HashMap::new()
                    }
                    Err(err) => {
                        warn!("Failed to read g2p output: {}", err);
                        HashMap::new()
                    }
                }
            }
            Ok(Ok(result)) => {
                let stderr = String::from_utf8_lossy(&result.stderr);
                warn!(
                    "g2p exited with status {}: {}",
                    result.status,
                    stderr.trim()
                );
                HashMap::new()
            }
            Ok(Err(err)) => {
                warn!("g2p failed to execute: {}", err);
                HashMap::new()
            }
            Err(_) => {
                warn!(
                    "g2p timed out after {}s (process will be killed)",
                    timeout.as_secs()
                );
                HashMap::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "MfaG2p"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output() {
        let parsed = MfaG2p::parse_output("dukakis\tD UW0 K AA1 K IH0 S\nWBUR W AH1 B ER0\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["DUKAKIS"], "D UW0 K AA1 K IH0 S");
        assert_eq!(parsed["WBUR"], "W AH1 B ER0");
    }

    #[test]
    fn test_parse_output_skips_malformed() {
        let parsed = MfaG2p::parse_output("LONELY\n\nGOOD G\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["GOOD"], "G");
    }

    #[test]
    fn test_detect_missing_binary() {
        let config = G2pConfig {
            command: "definitely-not-a-real-binary-name".to_string(),
            ..G2pConfig::default()
        };
        assert!(MfaG2p::detect(&config, &[]).is_none());
    }

    #[tokio::test]
    async fn test_failure_yields_empty_map() {
        // A backend whose command vanished after detection still degrades
        // to an empty map instead of erroring.
        let backend = MfaG2p {
            command: "definitely-not-a-real-binary-name".to_string(),
            model_name: "english_us_arpa".to_string(),
        };
        let words = vec!["DUKAKIS".to_string()];
        let result = backend.generate(&words, Duration::from_secs(5)).await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_empty_word_list_short_circuits() {
        let backend = MfaG2p {
            command: "true".to_string(),
            model_name: "english_us_arpa".to_string(),
        };
        let result = backend.generate(&[], Duration::from_secs(5)).await;
        assert!(result.is_empty());
    }
}
