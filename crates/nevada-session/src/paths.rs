//! Unified path management for Nevada configuration and session files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/nevada/            # Config directory (platform equivalent)
//! ├── config.toml              # Client configuration (API base URL)
//! ├── session_token            # Bearer token, bare string
//! └── session_user.json        # Serialized user profile
//! ```

use nevada_core::{NevadaError, Result};
use std::path::PathBuf;

/// Unified path management for the Nevada console.
pub struct NevadaPaths;

impl NevadaPaths {
    /// Returns the Nevada configuration directory
    /// (e.g. `~/.config/nevada/` on Linux).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("nevada"))
            .ok_or_else(|| NevadaError::config("Could not determine config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted bearer token.
    pub fn token_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session_token"))
    }

    /// Returns the path to the persisted user profile.
    pub fn user_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session_user.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_nevada() {
        let config_dir = NevadaPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("nevada"));
    }

    #[test]
    fn test_files_live_under_config_dir() {
        let config_dir = NevadaPaths::config_dir().unwrap();
        for path in [
            NevadaPaths::config_file().unwrap(),
            NevadaPaths::token_file().unwrap(),
            NevadaPaths::user_file().unwrap(),
        ] {
            assert!(path.starts_with(&config_dir));
        }
    }
}
