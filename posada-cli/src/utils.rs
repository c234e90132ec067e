//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and output
//! formatting helpers.

use crate::error::CliError;
use chrono::NaiveDate;
use posada::{Config, ConfigBuilder, Database, DatabaseConfig};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir.clone());
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the database configuration from global options and config.
fn database_config(global: &GlobalOptions, config: &Config) -> Result<DatabaseConfig, CliError> {
    let mut db_config = config
        .database_config()
        .map_err(|e| CliError::Config(e.to_string()))?;

    // The command line overrides any file or environment setting
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    }

    Ok(db_config)
}

/// Open the database for read-write access, creating it if needed.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_config = database_config(global, config)?;
    Database::open(db_config).map_err(CliError::from)
}

/// Open the database for read-only access.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database has never been initialized.
pub fn open_database_read_only(
    global: &GlobalOptions,
    config: &Config,
) -> Result<Database, CliError> {
    let db_config = database_config(global, config)?.read_only();
    Database::open(db_config).map_err(CliError::from)
}

/// Resolve the data directory path.
///
/// Returns the default data directory location: `~/.posada`
pub fn resolve_data_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".posada")
}

/// Format a date for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a monetary amount for display.
///
/// Uses the configured currency symbol when present, otherwise a plain
/// two-decimal rendering.
pub fn format_money(amount: f64, config: &Config) -> String {
    match config.currency.as_deref() {
        Some(symbol) => format!("{symbol}{amount:.2}"),
        None => format!("{amount:.2}"),
    }
}

/// Format an occupancy percentage for display.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Convert a `csv::Error` to a `CliError`.
pub fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Convert a `serde_json::Error` to a `CliError`.
pub fn json_error(e: serde_json::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}
