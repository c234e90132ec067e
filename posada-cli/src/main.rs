//! Main entry point for the posada CLI.
//!
//! This is the command-line interface for the posada booking engine.
//! It provides commands for inspecting and maintaining booking data:
//! - `init`: Initialize the data directory and database
//! - `occupancy`: Show room occupancy for an experience
//! - `metrics`: Show reservation metrics for an experience
//! - `reconcile`: Align a room type's physical units with its declared count
//! - `remove-room-type`: Remove a room type and all of its units

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = posada::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Occupancy(cmd) => cmd.execute(&global),
        cli::Command::Metrics(cmd) => cmd.execute(&global),
        cli::Command::Reconcile(cmd) => cmd.execute(&global),
        cli::Command::RemoveRoomType(cmd) => cmd.execute(&global),
        cli::Command::ListExperiences(cmd) => cmd.execute(&global),
        cli::Command::ListLocations(cmd) => cmd.execute(&global),
        cli::Command::ListReservations(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
