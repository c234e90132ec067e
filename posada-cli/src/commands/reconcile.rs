//! Reconcile command implementation.
//!
//! This module implements the `reconcile` command, which aligns a room
//! type's physical units with its declared count and capacity.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use posada::{PlanExecutor, ReconcileOptions, ReconcilePlan};

/// Reconcile the physical units of a room type with its declared count.
#[derive(Args)]
pub struct ReconcileCommand {
    /// Room type to reconcile
    #[arg(value_name = "ROOM_TYPE_ID")]
    pub room_type_id: i64,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl ReconcileCommand {
    /// Execute the reconcile command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = ReconcilePlan::new(ReconcileOptions::new(self.room_type_id)).build_plan(&db)?;

        let mut executor = PlanExecutor::new(&mut db);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan)?;

        for warning in &result.warnings {
            eprintln!("Warning: {warning}");
        }

        if global.quiet {
            return Ok(());
        }

        if result.dry_run {
            println!("Dry-run mode: no changes were made");
        }

        for action in &result.actions_taken {
            println!("{action}");
        }
        if result.units_created == 0 && result.units_deleted == 0 {
            println!("Room type {} already has its declared units", self.room_type_id);
        } else {
            println!(
                "Units created: {}, units deleted: {}",
                result.units_created, result.units_deleted
            );
        }

        Ok(())
    }
}
