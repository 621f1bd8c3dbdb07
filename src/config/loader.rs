use std::fs;
use std::path::PathBuf;
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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/nexus-inventory/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("nexus-inventory").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`
    ///   (local storage, default data path).
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The storage backend is a known kind
    /// - Remote settings are present and non-empty when selected
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.storage.backend.as_str() {
            "local" => Ok(()),
            "remote" => match &self.remote {
                None => Err(ConfigError::ValidationError {
                    message: "Remote backend selected but [remote] section is missing"
                        .to_string(),
                }),
                Some(remote) if remote.base_url.trim().is_empty() => {
                    Err(ConfigError::ValidationError {
                        message: "Remote base_url must not be empty".to_string(),
                    })
                }
                Some(_) => Ok(()),
            },
            other => Err(ConfigError::ValidationError {
                message: format!("Unknown storage backend '{}'", other),
            }),
        }
    }
}
