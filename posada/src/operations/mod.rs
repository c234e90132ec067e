//! Inventory operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for inventory changes,
//! separating planning from execution to enable dry-run mode, better
//! testing, and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Reads the current state, decides what must change,
//!    builds a plan
//! 2. **Execution**: Takes the plan and performs actual database operations
//!
//! # Examples
//!
//! ```no_run
//! use posada::operations::{ReconcilePlan, ReconcileOptions, PlanExecutor};
//! use posada::{Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/posada.db")).unwrap();
//!
//! // Generate plan
//! let plan = ReconcilePlan::new(ReconcileOptions::new(3))
//!     .build_plan(&db)
//!     .unwrap();
//!
//! // Execute plan
//! let mut executor = PlanExecutor::new(&mut db);
//! let result = executor.execute(&plan).unwrap();
//! ```

pub mod executor;
pub mod plan;
pub mod reconcile;
pub mod remove;

pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use reconcile::{reconcile_units, ReconcileOptions, ReconcilePlan, UnitReconciliation};
pub use remove::{RemoveRoomTypeOptions, RemoveRoomTypePlan};
