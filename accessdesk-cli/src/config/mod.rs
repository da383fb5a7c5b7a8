//! Portal configuration.
//!
//! Loaded from `~/.config/accessdesk/config.toml`; a missing file means
//! defaults. Mutable data (handoff keys, submitted requests, logs) lives
//! under the data dir, which the config can relocate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where handoff keys, request documents and logs are written.
    pub data_dir: Option<PathBuf>,
    /// Simulated latency of the mock directory, in milliseconds.
    pub mock_latency_ms: u64,
    /// Screen the portal opens on.
    pub default_screen: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            mock_latency_ms: 400,
            default_screen: "home".into(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("accessdesk").join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Resolved data directory (configured override or the platform one).
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir().context("Could not determine data directory")?;
        Ok(base.join("accessdesk"))
    }

    pub fn handoff_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("handoff"))
    }

    pub fn requests_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("requests"))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("accessdesk.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mock_latency_ms, 400);
        assert_eq!(config.default_screen, "home");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("mock_latency_ms = 0").unwrap();
        assert_eq!(config.mock_latency_ms, 0);
        assert_eq!(config.default_screen, "home");
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/accessdesk-test")),
            ..Config::default()
        };
        assert_eq!(
            config.handoff_dir().unwrap(),
            PathBuf::from("/tmp/accessdesk-test/handoff")
        );
        assert_eq!(
            config.requests_dir().unwrap(),
            PathBuf::from("/tmp/accessdesk-test/requests")
        );
    }
}
