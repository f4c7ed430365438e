//! Configuration management for Komet
//!
//! The configuration is a plain value handed to the client at construction.
//! Nothing in the client reads the environment; the CLI layers flag and
//! environment overrides on top of the file before building a client.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Base address used when neither a flag, the environment, nor the config
/// file names one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Transport timeout applied to every request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the metrics service; endpoint paths are appended to it
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Transport-level request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".komet").join("config.yaml"))
    }

    /// Resolve an optional override into the config file path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration for a command.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields the built-in defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::load_from(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Replace the base address when an override is present
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base {
            self.api_base = base.to_string();
        }
        self
    }

    /// Validate the base address
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(ConfigError::Invalid("API base address is empty".to_string()).into());
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API base address must start with http:// or https://, got {}",
                base
            ))
            .into());
        }
        Ok(())
    }
}
