use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub g2p: G2pConfig,
    pub normalize: NormalizeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Candidate locations for the base pronunciation dictionary.
    /// The first existing path wins.
    pub search_paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct G2pConfig {
    /// Candidate locations for the G2P model archive. First existing wins.
    pub model_search_paths: Vec<String>,
    /// Executable used to generate pronunciations.
    pub command: String,
    /// Model name passed to the G2P command.
    pub model_name: String,
    /// Timeout in seconds for a single G2P invocation.
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Directory normalized transcripts are written to when no
    /// output directory is given on the command line.
    pub output_dir: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![
                "~/Documents/MFA/pretrained_models/dictionary/english_us_arpa.dict".to_string(),
                "~/.local/share/mfa/models/dictionary/english_us_arpa.dict".to_string(),
            ],
        }
    }
}

impl Default for G2pConfig {
    fn default() -> Self {
        Self {
            model_search_paths: vec![
                "~/Documents/MFA/pretrained_models/g2p/english_us_arpa.zip".to_string(),
                "~/.local/share/mfa/models/g2p/english_us_arpa.zip".to_string(),
            ],
            command: "mfa".to_string(),
            model_name: "english_us_arpa".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            output_dir: "normalized_transcripts".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Dictionary search paths with `~` expanded.
    pub fn dictionary_search_paths(&self) -> Vec<PathBuf> {
        self.dictionary
            .search_paths
            .iter()
            .map(|p| global::expand_home(p))
            .collect()
    }

    /// G2P model search paths with `~` expanded.
    pub fn g2p_model_search_paths(&self) -> Vec<PathBuf> {
        self.g2p
            .model_search_paths
            .iter()
            .map(|p| global::expand_home(p))
            .collect()
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_paths_nonempty() {
        let config = Config::default();
        assert!(!config.dictionary.search_paths.is_empty());
        assert!(!config.g2p.model_search_paths.is_empty());
    }

    #[test]
    fn test_default_roundtrip() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.g2p.timeout_seconds, config.g2p.timeout_seconds);
        assert_eq!(parsed.g2p.command, "mfa");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[g2p]\ntimeout_seconds = 5\n").unwrap();
        assert_eq!(parsed.g2p.timeout_seconds, 5);
        assert_eq!(parsed.g2p.command, "mfa");
        assert!(!parsed.dictionary.search_paths.is_empty());
    }
}
