//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the posada data directory and database.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use posada::database::default_data_dir;
use posada::{Database, DatabaseConfig};
use std::path::PathBuf;

/// Initialize posada data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Create a default configuration file
    #[arg(long)]
    with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The --data-dir flag has a different meaning here than on other
    /// commands (where to create, not where to find).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = match self.data_dir.or_else(|| global.data_dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir().map_err(|e| CliError::Config(e.to_string()))?,
        };

        let dir_existed = data_dir.exists();
        if !dir_existed {
            std::fs::create_dir_all(&data_dir)?;
        }

        let db_path = data_dir.join("posada.db");
        let db_existed = db_path.exists();

        // Opening with auto-create applies the full schema on a fresh file
        let _db = Database::open(DatabaseConfig::new(&db_path))?;

        if !global.quiet {
            println!("Initialized posada in: {}", data_dir.display());
            if !dir_existed {
                println!("  - Created data directory");
            }
            if db_existed {
                println!("  - Database already exists (schema verified)");
            } else {
                println!("  - Created database");
            }
        }

        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                if !global.quiet {
                    println!("  - Configuration file already exists (not overwritten)");
                }
            } else {
                std::fs::write(&config_path, DEFAULT_CONFIG)?;
                if !global.quiet {
                    println!("  - Created default configuration file");
                }
            }
        }

        Ok(())
    }
}

/// Template written by `--with-config`.
const DEFAULT_CONFIG: &str = "\
# posada configuration
#
# data_dir: /path/to/data
# busy_timeout_seconds: 5
# currency: \"$\"
# log_mode: normal
";
