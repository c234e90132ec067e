//! List-reservations command implementation.
//!
//! This module implements the `list-reservations` command, which displays
//! the reservations attached to an experience in various formats, with
//! optional status and grouping filters.

use super::OutputFormat;
use crate::error::CliError;
use crate::utils::{
    csv_error, format_date, json_error, load_configuration, open_database_read_only, GlobalOptions,
};
use clap::Args;
use posada::{Reservation, ReservationStatus};
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "id",
    "customer_name",
    "customer_email",
    "status",
    "reserved_on",
    "total",
    "headcount",
    "liquidated",
];

/// List reservations for an experience.
#[derive(Args)]
pub struct ListReservationsCommand {
    /// Experience whose reservations to list
    #[arg(value_name = "EXPERIENCE_ID")]
    pub experience_id: i64,

    /// Filter by status (confirmed, pending, cancelled)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    /// Only show group bookings
    #[arg(long)]
    pub group_only: bool,

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

impl ListReservationsCommand {
    /// Execute the list-reservations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database_read_only(global, &config)?;

        db.get_experience(self.experience_id)?;

        let mut reservations = db.list_reservations_for_experience(self.experience_id)?;

        if let Some(ref wanted) = self.status {
            let status = parse_status(wanted)?;
            reservations.retain(|r| r.status() == Some(status));
        }

        if self.group_only {
            reservations.retain(|r| r.group);
        }

        match self.format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
            OutputFormat::Csv => format_as_csv(&reservations)?,
        }

        Ok(())
    }
}

/// Parse a status filter argument.
fn parse_status(s: &str) -> Result<ReservationStatus, CliError> {
    match s.to_ascii_lowercase().as_str() {
        "confirmed" => Ok(ReservationStatus::Confirmed),
        "pending" => Ok(ReservationStatus::Pending),
        "cancelled" => Ok(ReservationStatus::Cancelled),
        other => Err(CliError::InvalidArguments(format!(
            "unknown status '{other}' (expected confirmed, pending or cancelled)"
        ))),
    }
}

/// Render a reservation's status for display.
fn status_label(reservation: &Reservation) -> String {
    reservation.status().map_or_else(
        || format!("unknown({})", reservation.status_code),
        |s| s.to_string(),
    )
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{:.2}\t{}\t{}",
            res.id.unwrap_or(0),
            res.customer_name,
            res.customer_email,
            status_label(res),
            format_date(res.reserved_on),
            res.total,
            res.headcount(),
            if res.is_liquidated() { "yes" } else { "no" },
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, reservations).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format reservations as CSV.
fn format_as_csv(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        writer
            .write_record(&[
                res.id.unwrap_or(0).to_string(),
                res.customer_name.clone(),
                res.customer_email.clone(),
                status_label(res),
                format_date(res.reserved_on),
                format!("{:.2}", res.total),
                res.headcount().to_string(),
                res.is_liquidated().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
