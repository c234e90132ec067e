//! Inventory reconciliation planning.
//!
//! When a room type's declared unit count or per-unit capacity is
//! edited, the persisted units must be brought back in line. The
//! decision logic lives in the pure [`reconcile_units`] function;
//! [`ReconcilePlan`] wraps it into a plan against the database.

use crate::database::Database;
use crate::error::Result;
use crate::room::RoomUnit;

use super::plan::{OperationPlan, PlanAction};

/// The decisions produced by one reconciliation pass.
///
/// Each field maps to an independently retryable persistence step:
/// replaying any of them against a database where it already took
/// effect is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitReconciliation {
    /// Fresh unit templates to insert when the unit count grew.
    pub to_create: Vec<RoomUnit>,
    /// Ids of units to delete when the unit count shrank.
    pub to_delete_ids: Vec<i64>,
    /// Capacity to apply to every surviving unit.
    pub capacity_to_sync: u32,
}

impl UnitReconciliation {
    /// Returns true if no creates or deletes are needed.
    ///
    /// The capacity sync still applies; an "empty" reconciliation is
    /// only empty of structural changes.
    #[must_use]
    pub fn is_structurally_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_delete_ids.is_empty()
    }
}

/// Decides how to bring a room type's persisted units in line with its
/// declared shape.
///
/// Growing creates fresh templates (no occupants, available status, the
/// new capacity). Shrinking deletes the NEWEST units, identified by the
/// highest row ids, so long-lived units and any occupancy history they
/// carry survive. The capacity is always scheduled for a sync across
/// the surviving set, which also repairs units whose capacity drifted
/// without a count change.
///
/// Pure and deterministic; callers must pass a consistent snapshot of
/// the current units and serialize concurrent reconciliations for the
/// same room type.
///
/// # Examples
///
/// ```
/// use posada::operations::reconcile_units;
/// use posada::RoomUnit;
///
/// let mut units: Vec<RoomUnit> = (1..=5).map(|id| {
///     let mut u = RoomUnit::fresh(7, 2);
///     u.id = Some(id);
///     u
/// }).collect();
///
/// let decision = reconcile_units(&units, 7, 3, 2);
/// assert!(decision.to_create.is_empty());
/// assert_eq!(decision.to_delete_ids, vec![5, 4]);
/// assert_eq!(decision.capacity_to_sync, 2);
/// ```
#[must_use]
pub fn reconcile_units(
    current_units: &[RoomUnit],
    room_type_id: i64,
    desired_count: u32,
    capacity: u32,
) -> UnitReconciliation {
    let current = current_units.len();
    let desired = desired_count as usize;

    let to_create = if desired > current {
        (0..desired - current)
            .map(|_| RoomUnit::fresh(room_type_id, capacity))
            .collect()
    } else {
        Vec::new()
    };

    let to_delete_ids = if current > desired {
        // Newest first: highest ids go, oldest units survive.
        let mut ids: Vec<i64> = current_units
            .iter()
            .map(|u| u.id.unwrap_or(0))
            .collect();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids.truncate(current - desired);
        ids
    } else {
        Vec::new()
    };

    UnitReconciliation {
        to_create,
        to_delete_ids,
        capacity_to_sync: capacity,
    }
}

/// Options for a reconcile operation.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// The room type to reconcile.
    pub room_type_id: i64,
}

impl ReconcileOptions {
    /// Creates options targeting the given room type.
    #[must_use]
    pub const fn new(room_type_id: i64) -> Self {
        Self { room_type_id }
    }
}

/// Plans a reconciliation for one room type.
///
/// The plan reads the room type's declared shape and current units from
/// the database, runs [`reconcile_units`], and emits the corresponding
/// actions.
#[derive(Debug, Clone)]
pub struct ReconcilePlan {
    options: ReconcileOptions,
}

impl ReconcilePlan {
    /// Creates a new reconcile plan from options.
    #[must_use]
    pub const fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan against the current database state.
    ///
    /// # Errors
    ///
    /// Returns an error if the room type does not exist or the database
    /// cannot be read.
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let room_type = db.get_room_type(self.options.room_type_id)?;
        let units = db.list_units_for_room_type(self.options.room_type_id)?;

        let decision = reconcile_units(
            &units,
            self.options.room_type_id,
            room_type.desired_unit_count,
            room_type.capacity_per_unit,
        );

        let mut plan = OperationPlan::new(format!(
            "Reconcile units of room type {} ({} -> {})",
            self.options.room_type_id,
            units.len(),
            room_type.desired_unit_count,
        ));

        if !decision.to_create.is_empty() {
            plan.add_action(PlanAction::CreateUnits {
                room_type_id: self.options.room_type_id,
                units: decision.to_create,
            });
        }
        if !decision.to_delete_ids.is_empty() {
            let occupied_victims = units
                .iter()
                .filter(|u| decision.to_delete_ids.contains(&u.id.unwrap_or(0)))
                .filter(|u| u.occupied > 0)
                .count();
            if occupied_victims > 0 {
                plan.add_warning(format!(
                    "{occupied_victims} unit(s) scheduled for deletion still have occupants"
                ));
            }
            plan.add_action(PlanAction::DeleteUnits {
                ids: decision.to_delete_ids,
            });
        }
        plan.add_action(PlanAction::SyncUnitCapacity {
            room_type_id: self.options.room_type_id,
            capacity: decision.capacity_to_sync,
        });

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::UnitStatus;

    fn units_with_ids(ids: &[i64]) -> Vec<RoomUnit> {
        ids.iter()
            .map(|&id| {
                let mut u = RoomUnit::fresh(7, 2);
                u.id = Some(id);
                u
            })
            .collect()
    }

    #[test]
    fn test_grow_creates_fresh_templates() {
        let units = units_with_ids(&[1, 2]);
        let decision = reconcile_units(&units, 7, 5, 3);

        assert_eq!(decision.to_create.len(), 3);
        assert!(decision.to_delete_ids.is_empty());
        for unit in &decision.to_create {
            assert_eq!(unit.room_type_id, 7);
            assert_eq!(unit.capacity, 3);
            assert_eq!(unit.occupied, 0);
            assert_eq!(unit.status(), Some(UnitStatus::Available));
            assert!(unit.id.is_none());
        }
    }

    #[test]
    fn test_shrink_deletes_newest_first() {
        let units = units_with_ids(&[1, 2, 3, 4, 5]);
        let decision = reconcile_units(&units, 7, 3, 2);

        assert!(decision.to_create.is_empty());
        assert_eq!(decision.to_delete_ids, vec![5, 4]);
    }

    #[test]
    fn test_shrink_unordered_input() {
        let units = units_with_ids(&[3, 1, 5, 2, 4]);
        let decision = reconcile_units(&units, 7, 2, 2);
        assert_eq!(decision.to_delete_ids, vec![5, 4, 3]);
    }

    #[test]
    fn test_equal_count_syncs_capacity_only() {
        let units = units_with_ids(&[1, 2, 3]);
        let decision = reconcile_units(&units, 7, 3, 4);

        assert!(decision.is_structurally_empty());
        assert_eq!(decision.capacity_to_sync, 4);
    }

    #[test]
    fn test_shrink_to_zero() {
        let units = units_with_ids(&[1, 2]);
        let decision = reconcile_units(&units, 7, 0, 2);
        assert_eq!(decision.to_delete_ids, vec![2, 1]);
        assert!(decision.to_create.is_empty());
    }

    #[test]
    fn test_capacity_always_scheduled() {
        for desired in [0u32, 2, 5] {
            let decision = reconcile_units(&units_with_ids(&[1, 2]), 7, desired, 9);
            assert_eq!(decision.capacity_to_sync, 9);
        }
    }

    #[test]
    fn test_idempotent_on_converged_state() {
        // After applying a grow, the next pass is structurally empty.
        let mut units = units_with_ids(&[1, 2]);
        let first = reconcile_units(&units, 7, 4, 2);
        for (i, mut unit) in first.to_create.into_iter().enumerate() {
            unit.id = Some(100 + i as i64);
            units.push(unit);
        }

        let second = reconcile_units(&units, 7, 4, 2);
        assert!(second.is_structurally_empty());
    }
}
