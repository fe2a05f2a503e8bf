use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, Feed};

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

    #[error("Feed '{name}' not found in config")]
    FeedNotFound { name: String, available: Vec<String> },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/catbook/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, or the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catbook").join("config.toml")
    }

    /// Loads the default config file, or `Config::default()` if it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

    /// Checks:
    /// - at least one feed, with unique names
    /// - every feed has a URL and a payload key
    /// - the active feed exists
    /// - the tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feeds.is_empty() {
            return Err(validation("At least one feed must be configured"));
        }

        let mut seen = HashSet::new();
        for feed in &self.feeds {
            if !seen.insert(feed.name.as_str()) {
                return Err(validation(format!("Duplicate feed name '{}'", feed.name)));
            }
            if feed.url.trim().is_empty() {
                return Err(validation(format!("Feed '{}' has an empty url", feed.name)));
            }
            if feed.payload_key.trim().is_empty() {
                return Err(validation(format!(
                    "Feed '{}' has an empty payload_key",
                    feed.name
                )));
            }
        }

        if self.feed(&self.defaults.active).is_none() {
            return Err(validation(format!(
                "Active feed '{}' not found in configured feeds",
                self.defaults.active
            )));
        }

        if self.defaults.tick_rate_ms == 0 {
            return Err(validation("tick_rate_ms must be greater than zero"));
        }

        Ok(())
    }

    pub fn feed(&self, name: &str) -> Option<&Feed> {
        self.feeds.iter().find(|f| f.name == name)
    }

    pub fn feed_names(&self) -> Vec<String> {
        self.feeds.iter().map(|f| f.name.clone()).collect()
    }

    /// Looks up `name`, or the active feed when `None`.
    pub fn resolve_feed(&self, name: Option<&str>) -> Result<Feed, ConfigError> {
        let name = name.unwrap_or(&self.defaults.active);
        self.feed(name)
            .cloned()
            .ok_or_else(|| ConfigError::FeedNotFound {
                name: name.to_string(),
                available: self.feed_names(),
            })
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
