use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "alignprep";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("Unable to determine config directory")
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::data_dir() {
        return Ok(dir.join(APP_DIR));
    }
    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".local").join("share").join(APP_DIR));
    }
    Err(anyhow!("Unable to determine data directory"))
}

/// Expand a leading `~/` to the user's home directory.
///
/// Search-path entries in the config are stored with `~` so the file stays
/// portable between machines. Entries without a leading `~/` pass through
/// unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_passthrough() {
        assert_eq!(expand_home("/etc/foo"), PathBuf::from("/etc/foo"));
        assert_eq!(expand_home("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_expand_home_tilde() {
        let expanded = expand_home("~/Documents/MFA");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("Documents/MFA"));
    }
}
