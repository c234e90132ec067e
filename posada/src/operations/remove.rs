//! Room type removal planning.
//!
//! Deleting a room type cascades over its units first, then removes the
//! room type itself. The cascade is planner-enforced rather than left
//! to foreign keys, so the two steps remain visible and independently
//! retryable.

use crate::database::Database;
use crate::error::Result;

use super::plan::{OperationPlan, PlanAction};

/// Options for removing a room type.
#[derive(Debug, Clone)]
pub struct RemoveRoomTypeOptions {
    /// The room type to remove.
    pub room_type_id: i64,
}

impl RemoveRoomTypeOptions {
    /// Creates options targeting the given room type.
    #[must_use]
    pub const fn new(room_type_id: i64) -> Self {
        Self { room_type_id }
    }
}

/// Plans the cascading removal of a room type and its units.
#[derive(Debug, Clone)]
pub struct RemoveRoomTypePlan {
    options: RemoveRoomTypeOptions,
}

impl RemoveRoomTypePlan {
    /// Creates a new removal plan from options.
    #[must_use]
    pub const fn new(options: RemoveRoomTypeOptions) -> Self {
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

        let mut plan = OperationPlan::new(format!(
            "Remove room type {} ({})",
            self.options.room_type_id, room_type.name,
        ));

        let occupied = units.iter().filter(|u| u.occupied > 0).count();
        if occupied > 0 {
            plan.add_warning(format!("{occupied} unit(s) still have occupants"));
        }

        plan.add_action(PlanAction::DeleteUnitsForRoomType(
            self.options.room_type_id,
        ));
        plan.add_action(PlanAction::DeleteRoomType(self.options.room_type_id));

        Ok(plan)
    }
}
