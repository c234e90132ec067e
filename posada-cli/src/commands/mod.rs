//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `occupancy`: Show room occupancy for an experience
//! - `metrics`: Show reservation metrics for an experience
//! - `reconcile`: Align a room type's physical units with its declared count
//! - `remove_room_type`: Remove a room type and all of its units
//! - `list_experiences`: List experiences
//! - `list_locations`: List locations
//! - `list_reservations`: List reservations for an experience
//! - `show_data_dir`: Show resolved data directory path

pub mod init;
pub mod list_experiences;
pub mod list_locations;
pub mod list_reservations;
pub mod metrics;
pub mod occupancy;
pub mod reconcile;
pub mod remove_room_type;
pub mod show_data_dir;

pub use init::InitCommand;
pub use list_experiences::ListExperiencesCommand;
pub use list_locations::ListLocationsCommand;
pub use list_reservations::ListReservationsCommand;
pub use metrics::MetricsCommand;
pub use occupancy::OccupancyCommand;
pub use reconcile::ReconcileCommand;
pub use remove_room_type::RemoveRoomTypeCommand;
pub use show_data_dir::ShowDataDirCommand;

use clap::ValueEnum;

/// Output format shared by the reporting commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
