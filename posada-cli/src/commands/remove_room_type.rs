//! Remove-room-type command implementation.
//!
//! This module implements the `remove-room-type` command, which deletes a
//! room type together with all of its physical units.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use posada::{PlanExecutor, RemoveRoomTypeOptions, RemoveRoomTypePlan};

/// Remove a room type and all of its units.
#[derive(Args)]
pub struct RemoveRoomTypeCommand {
    /// Room type to remove
    #[arg(value_name = "ROOM_TYPE_ID")]
    pub room_type_id: i64,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl RemoveRoomTypeCommand {
    /// Execute the remove-room-type command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan =
            RemoveRoomTypePlan::new(RemoveRoomTypeOptions::new(self.room_type_id)).build_plan(&db)?;

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
            for action in &result.actions_taken {
                println!("{action}");
            }
        } else {
            println!(
                "Removed room type {} ({} unit(s) deleted)",
                self.room_type_id, result.units_deleted
            );
        }

        Ok(())
    }
}
