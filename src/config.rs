use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config for {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Credentials for the remote instance. Both fields are empty until set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Config {
    /// Overlay the given options on top of `self`. Absent or empty options
    /// keep the current value.
    pub fn merged(&self, url: Option<&str>, key: Option<&str>) -> Config {
        let url = url.filter(|u| !u.is_empty());
        let key = key.filter(|k| !k.is_empty());

        Config {
            api_url: url.map(str::to_string).unwrap_or_else(|| self.api_url.clone()),
            api_key: key.map(str::to_string).unwrap_or_else(|| self.api_key.clone()),
        }
    }
}

/// File-backed store holding a single [`Config`].
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with empty values if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "creating empty config file");
        self.save(&Config::default())
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the whole file. Callers merge with the current values first.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let body =
            serde_json::to_string_pretty(config).map_err(|source| ConfigError::Serialize {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, body).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
