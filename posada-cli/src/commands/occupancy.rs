//! Occupancy command implementation.
//!
//! This module implements the `occupancy` command, which displays per
//! room type occupancy statistics for an experience in various formats
//! (table, JSON, CSV).

use super::OutputFormat;
use crate::error::CliError;
use crate::utils::{
    csv_error, format_percent, json_error, load_configuration, open_database_read_only,
    GlobalOptions,
};
use clap::Args;
use posada::RoomTypeStatus;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "room_type",
    "capacity",
    "occupied",
    "available",
    "occupancy",
    "full",
    "partial",
    "empty",
];

/// Show room occupancy for an experience.
#[derive(Args)]
pub struct OccupancyCommand {
    /// Experience to report on
    #[arg(value_name = "EXPERIENCE_ID")]
    pub experience_id: i64,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "POSADA_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl OccupancyCommand {
    /// Execute the occupancy command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database_read_only(global, &config)?;

        // Confirms the experience exists before reporting on it
        db.get_experience(self.experience_id)?;

        let statuses = db.room_status_for_experience(self.experience_id)?;

        match self.format {
            OutputFormat::Table => format_as_table(&statuses)?,
            OutputFormat::Json => format_as_json(&statuses)?,
            OutputFormat::Csv => format_as_csv(&statuses)?,
        }

        Ok(())
    }
}

/// Format room type statuses as a human-readable table.
fn format_as_table(statuses: &[RoomTypeStatus]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for status in statuses {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            status.room_type.name,
            status.stats.total_capacity,
            status.stats.total_occupied,
            status.stats.total_available,
            format_percent(status.stats.occupancy_percent),
            status.stats.full_units,
            status.stats.partial_units,
            status.stats.empty_units,
        )?;
    }

    Ok(())
}

/// Format room type statuses as JSON.
fn format_as_json(statuses: &[RoomTypeStatus]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = statuses
        .iter()
        .map(|status| {
            serde_json::json!({
                "room_type": status.room_type.name,
                "room_type_id": status.room_type.id,
                "capacity": status.stats.total_capacity,
                "occupied": status.stats.total_occupied,
                "available": status.stats.total_available,
                "occupancy_percent": status.stats.occupancy_percent,
                "full_units": status.stats.full_units,
                "partial_units": status.stats.partial_units,
                "empty_units": status.stats.empty_units,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format room type statuses as CSV.
fn format_as_csv(statuses: &[RoomTypeStatus]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for status in statuses {
        writer
            .write_record(&[
                status.room_type.name.clone(),
                status.stats.total_capacity.to_string(),
                status.stats.total_occupied.to_string(),
                status.stats.total_available.to_string(),
                format!("{:.2}", status.stats.occupancy_percent),
                status.stats.full_units.to_string(),
                status.stats.partial_units.to_string(),
                status.stats.empty_units.to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
