//! Transaction management utilities.
//!
//! This module provides the batched unit operations the plan executor
//! applies. Each operation is atomic and safe to replay: inserting an
//! already-materialized batch is guarded by the planner, and deletes and
//! capacity syncs are no-ops once their effect is in place.

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::room::RoomUnit;

use super::connection::Database;
use super::schema::{DELETE_ROOM_UNIT, INSERT_ROOM_UNIT};

const SYNC_UNIT_CAPACITY: &str = r"
    UPDATE room_units
    SET capacity = ?
    WHERE room_type_id = ?
";

const DELETE_UNITS_FOR_ROOM_TYPE: &str = r"
    DELETE FROM room_units
    WHERE room_type_id = ?
";

impl Database {
    /// Inserts a batch of units for a room type in a single transaction.
    ///
    /// The owning id on each template is ignored in favor of the given
    /// `room_type_id`, so reused templates cannot attach to the wrong
    /// room type. Returns the number of units inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails, or the transaction cannot be committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use posada::{Database, DatabaseConfig, RoomUnit};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/posada.db")).unwrap();
    /// let units = vec![RoomUnit::fresh(3, 2), RoomUnit::fresh(3, 2)];
    /// let created = db.batch_create_units(3, &units).unwrap();
    /// assert_eq!(created, 2);
    /// ```
    pub fn batch_create_units(&mut self, room_type_id: i64, units: &[RoomUnit]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(INSERT_ROOM_UNIT)?;
            for unit in units {
                stmt.execute(params![
                    room_type_id,
                    unit.capacity,
                    unit.occupied,
                    unit.status_code,
                ])?;
            }
        }

        tx.commit()?;
        Ok(units.len())
    }

    /// Deletes units by id in a single transaction.
    ///
    /// Ids with no matching row are skipped. Returns the number of units
    /// actually deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any delete
    /// fails, or the transaction cannot be committed.
    pub fn batch_delete_units(&mut self, ids: &[i64]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut deleted = 0;
        {
            let mut stmt = tx.prepare(DELETE_ROOM_UNIT)?;
            for id in ids {
                deleted += stmt.execute([id])?;
            }
        }

        tx.commit()?;
        Ok(deleted)
    }

    /// Sets the capacity on every unit of a room type in one UPDATE.
    ///
    /// Returns the number of units touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn sync_unit_capacity(&mut self, room_type_id: i64, capacity: u32) -> Result<usize> {
        let updated = self
            .conn
            .execute(SYNC_UNIT_CAPACITY, params![capacity, room_type_id])?;
        Ok(updated)
    }

    /// Deletes every unit belonging to a room type.
    ///
    /// Returns the number of units deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_units_for_room_type(&mut self, room_type_id: i64) -> Result<usize> {
        let deleted = self
            .conn
            .execute(DELETE_UNITS_FOR_ROOM_TYPE, [room_type_id])?;
        Ok(deleted)
    }
}
