//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    InitCommand, ListExperiencesCommand, ListLocationsCommand, ListReservationsCommand,
    MetricsCommand, OccupancyCommand, ReconcileCommand, RemoveRoomTypeCommand, ShowDataDirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing experience bookings and room occupancy.
#[derive(Parser)]
#[command(name = "posada")]
#[command(version, about = "Manage experience bookings and room occupancy", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "POSADA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "POSADA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the posada data directory and database
    Init(InitCommand),

    /// Show room occupancy for an experience
    Occupancy(OccupancyCommand),

    /// Show reservation metrics for an experience
    Metrics(MetricsCommand),

    /// Reconcile the physical units of a room type with its declared count
    Reconcile(ReconcileCommand),

    /// Remove a room type and all of its units
    RemoveRoomType(RemoveRoomTypeCommand),

    /// List experiences
    ListExperiences(ListExperiencesCommand),

    /// List locations
    ListLocations(ListLocationsCommand),

    /// List reservations for an experience
    ListReservations(ListReservationsCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),
}
