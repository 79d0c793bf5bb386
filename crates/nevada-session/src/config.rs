//! Client configuration.
//!
//! Resolution order: `config.toml` in the Nevada config directory, then the
//! `NEVADA_API_URL` environment variable, then the local development
//! default. A missing config file is not an error.

use crate::paths::NevadaPaths;
use nevada_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "NEVADA_API_URL";

/// Configuration for the Nevada API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote Nevada API, without trailing slash.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Partial on-disk form; absent fields fall back to defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from the default config file location and the
    /// environment.
    pub fn load() -> Result<Self> {
        let path = NevadaPaths::config_file()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit file path (for testing), then
    /// applies the environment override and default.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file: ConfigFile = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(nevada_core::NevadaError::from)?;
            toml::from_str(&content)?
        } else {
            ConfigFile::default()
        };

        let api_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_default_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_file_value_wins_over_default_and_slash_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"https://api.nevada.example/\"\n").unwrap();
        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://api.nevada.example");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [broken").unwrap();
        assert!(ClientConfig::load_from(&path).is_err());
    }
}
