//! Metrics command implementation.
//!
//! This module implements the `metrics` command, which aggregates the
//! reservations of an experience into revenue, status, grouping, payment
//! and customer counts.

use super::OutputFormat;
use crate::error::CliError;
use crate::utils::{
    format_money, json_error, load_configuration, open_database_read_only, GlobalOptions,
};
use clap::Args;
use posada::{Config, ReservationMetrics};
use std::io::Write;

/// Show reservation metrics for an experience.
#[derive(Args)]
pub struct MetricsCommand {
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

impl MetricsCommand {
    /// Execute the metrics command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database_read_only(global, &config)?;

        db.get_experience(self.experience_id)?;

        let metrics = db.metrics_for_experience(self.experience_id)?;

        match self.format {
            OutputFormat::Table => format_as_table(&metrics, &config)?,
            OutputFormat::Json => format_as_json(&metrics)?,
            OutputFormat::Csv => format_as_csv(&metrics)?,
        }

        Ok(())
    }
}

/// The metric rows in output order.
fn metric_rows(metrics: &ReservationMetrics, config: &Config) -> Vec<(&'static str, String)> {
    vec![
        ("total_reservations", metrics.total_count.to_string()),
        ("total_revenue", format_money(metrics.total_revenue, config)),
        ("confirmed", metrics.confirmed_count.to_string()),
        ("pending", metrics.pending_count.to_string()),
        ("cancelled", metrics.cancelled_count.to_string()),
        ("group", metrics.group_count.to_string()),
        ("individual", metrics.individual_count.to_string()),
        ("total_headcount", metrics.total_headcount.to_string()),
        ("liquidated", metrics.liquidated_count.to_string()),
        ("outstanding", metrics.outstanding_count.to_string()),
        ("unique_customers", metrics.unique_customers.to_string()),
    ]
}

/// Format metrics as a human-readable table.
fn format_as_table(metrics: &ReservationMetrics, config: &Config) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for (name, value) in metric_rows(metrics, config) {
        writeln!(handle, "{name}\t{value}")?;
    }

    Ok(())
}

/// Format metrics as JSON.
fn format_as_json(metrics: &ReservationMetrics) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, metrics).map_err(json_error)?;
    writeln!(handle)?;

    Ok(())
}

/// Format metrics as CSV (one metric per row).
fn format_as_csv(metrics: &ReservationMetrics) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer
        .write_record(["metric", "value"])
        .map_err(crate::utils::csv_error)?;

    // CSV output keeps raw numbers, so currency formatting does not apply
    let plain = Config::default();
    for (name, value) in metric_rows(metrics, &plain) {
        writer
            .write_record([name, value.as_str()])
            .map_err(crate::utils::csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
