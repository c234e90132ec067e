//! Configuration system for posada.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.posada/config.yaml`)
//! - Environment variable overrides (POSADA_*)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (POSADA_*)
//! 3. User config (`~/.posada/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use posada::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Currency: {}", config.currency.as_deref().unwrap_or("MXN"));
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use posada::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     data_dir: Some(PathBuf::from("/tmp/posada-data")),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/posada-data")));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{default_data_dir, DatabaseConfig};
use crate::error::Result;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in defaults
/// when the configuration is consumed.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the database and user configuration.
    pub data_dir: Option<PathBuf>,

    /// Busy timeout for database lock contention, in seconds.
    pub busy_timeout_seconds: Option<u64>,

    /// Currency code used when formatting amounts (default "MXN").
    pub currency: Option<String>,

    /// Log mode override ("quiet", "normal", or "verbose").
    pub log_mode: Option<String>,
}

impl Config {
    /// Resolves the database configuration this config describes.
    ///
    /// The database lives at `<data_dir>/posada.db`; the busy timeout is
    /// applied when set.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is configured and the home
    /// directory cannot be determined.
    pub fn database_config(&self) -> Result<DatabaseConfig> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        let mut db_config = DatabaseConfig::new(data_dir.join("posada.db"));
        if let Some(secs) = self.busy_timeout_seconds {
            db_config = db_config.with_busy_timeout(Duration::from_secs(secs));
        }
        Ok(db_config)
    }

    /// Merges another config over this one. Set fields win.
    fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.busy_timeout_seconds.is_some() {
            self.busy_timeout_seconds = other.busy_timeout_seconds;
        }
        if other.currency.is_some() {
            self.currency = other.currency;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
    }
}

/// Builder for assembling configuration from all sources.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
    data_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder that reads all sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips reading the user configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides on top of all other sources.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Overrides the directory the user configuration is loaded from.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Assembles the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the user configuration file exists but cannot
    /// be read or parsed.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let dir = match &self.data_dir {
                Some(dir) => dir.clone(),
                None => match default_data_dir() {
                    Ok(dir) => dir,
                    // No home directory: nothing to load
                    Err(_) => PathBuf::new(),
                },
            };
            let path = dir.join("config.yaml");
            if path.is_file() {
                let contents = std::fs::read_to_string(&path)?;
                let file_config: Config = serde_yaml::from_str(&contents)?;
                config.merge(file_config);
            }
        }

        if !self.skip_env {
            config.merge(Self::from_env());
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        if let Some(data_dir) = self.data_dir {
            config.data_dir = Some(data_dir);
        }

        Ok(config)
    }

    /// Reads overrides from POSADA_* environment variables.
    fn from_env() -> Config {
        Config {
            data_dir: std::env::var("POSADA_DATA_DIR").ok().map(PathBuf::from),
            busy_timeout_seconds: std::env::var("POSADA_BUSY_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok()),
            currency: std::env::var("POSADA_CURRENCY").ok(),
            log_mode: std::env::var("POSADA_LOG_MODE").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_programmatic_overrides() {
        let custom = Config {
            currency: Some("USD".to_string()),
            busy_timeout_seconds: Some(10),
            ..Default::default()
        };
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(custom)
            .build()
            .unwrap();
        assert_eq!(config.currency.as_deref(), Some("USD"));
        assert_eq!(config.busy_timeout_seconds, Some(10));
    }

    #[test]
    fn test_loads_user_config_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "currency: USD\nbusy_timeout_seconds: 7\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_data_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(config.currency.as_deref(), Some("USD"));
        assert_eq!(config.busy_timeout_seconds, Some(7));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "not_a_field: 1\n").unwrap();

        let result = ConfigBuilder::new()
            .skip_env()
            .with_data_dir(dir.path())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_override_beats_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "currency: USD\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_data_dir(dir.path())
            .with_config(Config {
                currency: Some("EUR".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_database_config_resolution() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/posada-data")),
            busy_timeout_seconds: Some(9),
            ..Default::default()
        };
        let db_config = config.database_config().unwrap();
        assert_eq!(db_config.path, PathBuf::from("/tmp/posada-data/posada.db"));
        assert_eq!(db_config.busy_timeout, Duration::from_secs(9));
    }
}
