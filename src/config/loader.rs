use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file and the TUI log.
    ///
    /// Uses `~/.config/remote-toast` on Unix/macOS, or the equivalent via
    /// `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("remote-toast")
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one remote is configured
    /// - Remote names are non-empty and unique
    /// - The per-attempt timeout is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remotes.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one remote must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for remote in &self.remotes {
            if remote.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Remote name must not be empty".to_string(),
                });
            }
            if !seen.insert(remote.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Remote '{}' is configured more than once", remote.name),
                });
            }
        }

        if self.loader.timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "loader.timeout_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
