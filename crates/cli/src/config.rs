// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Front-end configuration.
//!
//! Configuration is stored in `<config_dir>/storedeck/config.toml` and includes:
//! - `api_base_url`: Location of the store service
//! - `[poll]`: Background poll pacing in milliseconds
//!
//! Resolution order for the file: `--config`, then `STOREDECK_CONFIG`, then
//! the default location. For the service URL: `--api-url`, then
//! `STOREDECK_API_BASE_URL`, then the file, then the default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::DEFAULT_BASE_URL;
use crate::env;
use crate::error::{Error, Result};
use crate::sync::{PollConfig, DEFAULT_BASE_INTERVAL, DEFAULT_MAX_INTERVAL};

const CONFIG_DIR_NAME: &str = "storedeck";
const CONFIG_FILE_NAME: &str = "config.toml";

/// storedeck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the store service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Background poll pacing.
    #[serde(default)]
    pub poll: PollSettings,
}

/// Poll pacing as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSettings {
    /// Delay between polls while healthy (default: 2500).
    #[serde(default = "default_base_interval_ms")]
    pub base_interval_ms: u64,
    /// Upper bound on the delay during an outage (default: 15000).
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_base_interval_ms() -> u64 {
    DEFAULT_BASE_INTERVAL.as_millis() as u64
}

fn default_max_interval_ms() -> u64 {
    DEFAULT_MAX_INTERVAL.as_millis() as u64
}

impl Default for PollSettings {
    fn default() -> Self {
        PollSettings {
            base_interval_ms: default_base_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            poll: PollSettings::default(),
        }
    }
}

/// Environment-provided overrides, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub config_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        EnvOverrides {
            config_path: env::config_path(),
            api_base_url: env::api_base_url(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolves the effective configuration from flags, environment and file.
    ///
    /// An explicitly named file must exist; a missing default file means
    /// defaults.
    pub fn resolve(
        config_flag: Option<&Path>,
        api_url_flag: Option<&str>,
        overrides: &EnvOverrides,
    ) -> Result<Self> {
        let explicit = config_flag
            .map(Path::to_path_buf)
            .or_else(|| overrides.config_path.clone());

        let mut config = match explicit {
            Some(path) => Self::load(&path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path)?,
                _ => Config::default(),
            },
        };

        if let Some(url) = api_url_flag.or(overrides.api_base_url.as_deref()) {
            config.api_base_url = url.to_string();
        }
        config.api_base_url = config.api_base_url.trim().to_string();

        config.validate()?;
        Ok(config)
    }

    /// Checks the service URL scheme and poll pacing bounds.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidApiUrl(self.api_base_url.clone()));
        }

        let PollSettings {
            base_interval_ms,
            max_interval_ms,
        } = self.poll;
        if base_interval_ms == 0 {
            return Err(Error::InvalidPollInterval {
                reason: "base_interval_ms must be greater than zero".to_string(),
            });
        }
        if max_interval_ms == 0 {
            return Err(Error::InvalidPollInterval {
                reason: "max_interval_ms must be greater than zero".to_string(),
            });
        }
        if base_interval_ms > max_interval_ms {
            return Err(Error::InvalidPollInterval {
                reason: format!(
                    "base_interval_ms ({}) exceeds max_interval_ms ({})",
                    base_interval_ms, max_interval_ms
                ),
            });
        }
        Ok(())
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            base_interval: Duration::from_millis(self.poll.base_interval_ms),
            max_interval: Duration::from_millis(self.poll.max_interval_ms),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
