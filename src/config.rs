//! Configuration persistence for msg2phone
//!
//! A single TOML file holds the gateway URL. The store keeps only the path;
//! every read goes back to disk, so a concurrent `config` command is picked
//! up by the next notify call.

use crate::errors::{AppError, AppResult};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "MSG2PHONE_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

/// On-disk configuration mapping
///
/// Only `url` is interpreted; any other keys found in the file are carried
/// through writes untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Handle to the configuration file location
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Opens the store at the default location: `$MSG2PHONE_CONFIG_DIR` if
    /// set, otherwise `msg2phone/` under the user config directory.
    pub fn open_default() -> AppResult<Self> {
        let dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let base_dirs = BaseDirs::new()
                    .ok_or_else(|| AppError::config("Failed to locate a home directory"))?;
                base_dirs.config_dir().join("msg2phone")
            }
        };
        Ok(Self::open_at(dir))
    }

    /// Opens the store in an explicit directory.
    pub fn open_at(dir: impl Into<PathBuf>) -> Self {
        ConfigStore {
            path: dir.into().join(CONFIG_FILE_NAME),
        }
    }

    /// Path of the backing config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration from disk. A missing file is an empty
    /// configuration, not an error; an unparsable file is.
    pub fn load(&self) -> AppResult<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::io_with_source(&self.path, "read config file", e))?;
        toml::from_str(&content)
            .map_err(|e| AppError::config_with_source("Failed to parse config file", e))
    }

    /// Writes the configuration back to disk, creating the directory if
    /// needed.
    pub fn save(&self, config: &Config) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::io_with_source(dir, "create config directory", e))?;
        }
        let content = toml::to_string_pretty(config)
            .map_err(|e| AppError::config_with_source("Failed to serialize config", e))?;
        fs::write(&self.path, content)
            .map_err(|e| AppError::io_with_source(&self.path, "write config file", e))?;
        Ok(())
    }

    /// Merges the gateway URL into the existing configuration, preserving
    /// unknown keys.
    pub fn set_url(&self, url: &str) -> AppResult<()> {
        let mut config = self.load()?;
        config.url = Some(url.to_string());
        self.save(&config)
    }
}
