//! Plan types for inventory operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::room::RoomUnit;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed. Actions within a plan are
/// independently retryable: replaying a plan whose actions already took
/// effect leaves the database unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Insert a batch of fresh units for a room type.
    CreateUnits {
        /// The owning room type.
        room_type_id: i64,
        /// The unit templates to insert.
        units: Vec<RoomUnit>,
    },

    /// Delete specific units by id.
    DeleteUnits {
        /// The unit ids to delete.
        ids: Vec<i64>,
    },

    /// Align every surviving unit of a room type to the given capacity.
    SyncUnitCapacity {
        /// The owning room type.
        room_type_id: i64,
        /// The capacity to apply.
        capacity: u32,
    },

    /// Delete all units belonging to a room type.
    DeleteUnitsForRoomType(i64),

    /// Delete a room type record.
    DeleteRoomType(i64),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateUnits {
                room_type_id,
                units,
            } => {
                format!("Create {} unit(s) for room type {room_type_id}", units.len())
            }
            Self::DeleteUnits { ids } => {
                format!("Delete {} unit(s): {ids:?}", ids.len())
            }
            Self::SyncUnitCapacity {
                room_type_id,
                capacity,
            } => {
                format!("Set capacity {capacity} on all units of room type {room_type_id}")
            }
            Self::DeleteUnitsForRoomType(room_type_id) => {
                format!("Delete all units of room type {room_type_id}")
            }
            Self::DeleteRoomType(room_type_id) => {
                format!("Delete room type {room_type_id}")
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Reconcile room type 3");
    /// assert_eq!(plan.description, "Reconcile room type 3");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    pub fn add_action(&mut self, action: PlanAction) {
        self.actions.push(action);
    }

    /// Adds a warning to the plan.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns true if the plan contains no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = OperationPlan::new("noop");
        assert!(plan.is_empty());
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_add_action_and_warning() {
        let mut plan = OperationPlan::new("adjust");
        plan.add_action(PlanAction::DeleteUnits { ids: vec![5, 4] });
        plan.add_warning("two units will be removed");
        assert!(!plan.is_empty());
        assert_eq!(plan.actions.len(), 1);
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_action_descriptions() {
        let create = PlanAction::CreateUnits {
            room_type_id: 3,
            units: vec![RoomUnit::fresh(3, 2)],
        };
        assert_eq!(create.description(), "Create 1 unit(s) for room type 3");

        let delete = PlanAction::DeleteUnits { ids: vec![5, 4] };
        assert_eq!(delete.description(), "Delete 2 unit(s): [5, 4]");

        let sync = PlanAction::SyncUnitCapacity {
            room_type_id: 3,
            capacity: 2,
        };
        assert_eq!(sync.description(), "Set capacity 2 on all units of room type 3");

        assert_eq!(
            PlanAction::DeleteRoomType(9).description(),
            "Delete room type 9"
        );
    }
}
