//! List-locations command implementation.

use super::OutputFormat;
use crate::error::CliError;
use crate::utils::{
    csv_error, json_error, load_configuration, open_database_read_only, GlobalOptions,
};
use clap::Args;
use posada::Location;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 5] = ["id", "name", "state", "country", "active"];

/// List locations.
#[derive(Args)]
pub struct ListLocationsCommand {
    /// Only show active locations
    #[arg(long)]
    pub active: bool,

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

impl ListLocationsCommand {
    /// Execute the list-locations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database_read_only(global, &config)?;

        let locations = if self.active {
            db.list_active_locations()?
        } else {
            db.list_locations()?
        };

        match self.format {
            OutputFormat::Table => format_as_table(&locations)?,
            OutputFormat::Json => format_as_json(&locations)?,
            OutputFormat::Csv => format_as_csv(&locations)?,
        }

        Ok(())
    }
}

/// Format locations as a human-readable table.
fn format_as_table(locations: &[Location]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for loc in locations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            loc.id.unwrap_or(0),
            loc.name,
            loc.state,
            loc.country,
            if loc.active { "yes" } else { "no" },
        )?;
    }

    Ok(())
}

/// Format locations as JSON.
fn format_as_json(locations: &[Location]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, locations).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format locations as CSV.
fn format_as_csv(locations: &[Location]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for loc in locations {
        writer
            .write_record(&[
                loc.id.unwrap_or(0).to_string(),
                loc.name.clone(),
                loc.state.clone(),
                loc.country.clone(),
                loc.active.to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
