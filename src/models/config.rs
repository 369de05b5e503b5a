//! Configuration model.
//!
//! Loaded from `~/.config/tv_browser/config.toml` when present. Environment
//! variables override file values:
//! - `TV_BROWSER_BASE_URL`: catalog service root (default: https://api.tvmaze.com)
//! - `TV_BROWSER_TIMEOUT`: request timeout in seconds (default: 30)

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog service configuration.
    pub catalog: CatalogConfig,
    /// Browsing preferences.
    pub browse: BrowseConfig,
}

/// Catalog service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Service root URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Open the alphabetically first show once the list loads.
    pub auto_select_first: bool,
    /// Default output format.
    pub format: OutputFormat,
}

/// How listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Simple,
    Json,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            auto_select_first: true,
            format: OutputFormat::Table,
        }
    }
}

impl CatalogConfig {
    /// Apply `TV_BROWSER_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(base_url) = std::env::var("TV_BROWSER_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(timeout) = std::env::var("TV_BROWSER_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = timeout;
        }
    }

    /// Reject values that cannot produce a working client.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(crate::Error::InvalidConfig(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(crate::Error::InvalidConfig(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tv_browser")
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = config_dir().join("config.toml");

    let mut config = if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    config.catalog.apply_env();
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.base_url, "https://api.tvmaze.com");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert!(config.browse.auto_select_first);
        assert_eq!(config.browse.format, OutputFormat::Table);
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[catalog]\nbase_url = \"http://localhost:8080\"\n\n[browse]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:8080");
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.browse.format, OutputFormat::Json);
        assert!(config.browse.auto_select_first);
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[catalog\nbase_url = 1").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(crate::Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_validate() {
        let mut catalog = CatalogConfig::default();
        assert!(catalog.validate().is_ok());

        catalog.base_url = "ftp://example.com".to_string();
        assert!(catalog.validate().is_err());

        catalog.base_url = "http://example.com".to_string();
        catalog.timeout_secs = 0;
        assert!(catalog.validate().is_err());
    }
}
