//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use crate::database::Database;
use crate::error::Result;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// Number of units inserted.
    pub units_created: usize,

    /// Number of units deleted.
    pub units_deleted: usize,
}

impl ExecutionResult {
    fn success(plan: &OperationPlan, units_created: usize, units_deleted: usize) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            units_created,
            units_deleted,
        }
    }

    fn dry_run(plan: &OperationPlan) -> Self {
        let (units_created, units_deleted) = Self::projected_counts(plan);
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            units_created,
            units_deleted,
        }
    }

    /// Counts the creations and id-targeted deletions a plan would
    /// perform, without touching the database. Cascade deletions are
    /// not counted since their size is only known at execution time.
    fn projected_counts(plan: &OperationPlan) -> (usize, usize) {
        let mut created = 0;
        let mut deleted = 0;
        for action in &plan.actions {
            match action {
                PlanAction::CreateUnits { units, .. } => created += units.len(),
                PlanAction::DeleteUnits { ids } => deleted += ids.len(),
                _ => {}
            }
        }
        (created, deleted)
    }
}

/// Executes operation plans against the database.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes).
///
/// # Examples
///
/// ```no_run
/// use posada::operations::{PlanExecutor, ReconcilePlan, ReconcileOptions};
/// use posada::{Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/posada.db")).unwrap();
/// let plan = ReconcilePlan::new(ReconcileOptions::new(3)).build_plan(&db).unwrap();
///
/// // Normal execution
/// let mut executor = PlanExecutor::new(&mut db);
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.success);
///
/// // Dry-run execution
/// let mut executor = PlanExecutor::new(&mut db).dry_run();
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports what the plan would do but
    /// does not modify the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::dry_run(plan));
        }

        let mut units_created = 0;
        let mut units_deleted = 0;
        for action in &plan.actions {
            log::debug!("executing action: {}", action.description());
            let (created, deleted) = self.execute_action(action)?;
            units_created += created;
            units_deleted += deleted;
        }

        Ok(ExecutionResult::success(plan, units_created, units_deleted))
    }

    /// Executes a single action, returning (created, deleted) unit counts.
    fn execute_action(&mut self, action: &PlanAction) -> Result<(usize, usize)> {
        match action {
            PlanAction::CreateUnits {
                room_type_id,
                units,
            } => {
                let created = self.db.batch_create_units(*room_type_id, units)?;
                Ok((created, 0))
            }
            PlanAction::DeleteUnits { ids } => {
                let deleted = self.db.batch_delete_units(ids)?;
                Ok((0, deleted))
            }
            PlanAction::SyncUnitCapacity {
                room_type_id,
                capacity,
            } => {
                self.db.sync_unit_capacity(*room_type_id, *capacity)?;
                Ok((0, 0))
            }
            PlanAction::DeleteUnitsForRoomType(room_type_id) => {
                let deleted = self.db.delete_units_for_room_type(*room_type_id)?;
                Ok((0, deleted))
            }
            PlanAction::DeleteRoomType(room_type_id) => {
                self.db.delete_room_type(*room_type_id)?;
                Ok((0, 0))
            }
        }
    }
}
