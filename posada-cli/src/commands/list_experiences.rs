//! List-experiences command implementation.

use super::OutputFormat;
use crate::error::CliError;
use crate::utils::{
    csv_error, format_date, json_error, load_configuration, open_database_read_only, GlobalOptions,
};
use clap::Args;
use posada::Experience;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "title",
    "start_date",
    "end_date",
    "capacity",
    "active",
    "location_id",
];

/// List experiences.
#[derive(Args)]
pub struct ListExperiencesCommand {
    /// Only show active experiences
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

impl ListExperiencesCommand {
    /// Execute the list-experiences command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database_read_only(global, &config)?;

        let experiences = if self.active {
            db.list_active_experiences()?
        } else {
            db.list_experiences()?
        };

        match self.format {
            OutputFormat::Table => format_as_table(&experiences)?,
            OutputFormat::Json => format_as_json(&experiences)?,
            OutputFormat::Csv => format_as_csv(&experiences)?,
        }

        Ok(())
    }
}

/// Format experiences as a human-readable table.
fn format_as_table(experiences: &[Experience]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for exp in experiences {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            exp.id.unwrap_or(0),
            exp.title,
            format_date(exp.start_date),
            format_date(exp.end_date),
            exp.capacity,
            if exp.active { "yes" } else { "no" },
            exp.location_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        )?;
    }

    Ok(())
}

/// Format experiences as JSON.
fn format_as_json(experiences: &[Experience]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, experiences).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format experiences as CSV.
fn format_as_csv(experiences: &[Experience]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for exp in experiences {
        writer
            .write_record(&[
                exp.id.unwrap_or(0).to_string(),
                exp.title.clone(),
                format_date(exp.start_date),
                format_date(exp.end_date),
                exp.capacity.to_string(),
                exp.active.to_string(),
                exp.location_id.map(|id| id.to_string()).unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
