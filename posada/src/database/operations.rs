//! Database CRUD operations for catalog entities, inventory, and bookings.
//!
//! This module implements all create, read, update, and delete operations,
//! plus the derived views (room status, reservation metrics) the admin
//! surfaces are built on. One-row detail relations are joined and
//! unwrapped here; callers only ever see `Option<Detail>` on the parent.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::experience::{Experience, ExperienceDetail};
use crate::location::{Location, LocationDetail};
use crate::reservation::Reservation;
use crate::room::{RoomType, RoomTypeStatus, RoomUnit};
use crate::stats::{compute_metrics, compute_occupancy, ReservationMetrics};

use super::connection::Database;
use super::schema::INSERT_ROOM_UNIT;

/// Date storage format. Sorts correctly as text.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub(super) fn date_to_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(super) fn text_to_date(text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Serializes an image list for storage as a JSON text column.
pub(super) fn images_to_json(images: &[String]) -> rusqlite::Result<String> {
    serde_json::to_string(images).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Deserializes an image list from a JSON text column.
pub(super) fn json_to_images(json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Helper function to deserialize a location from a database row.
///
/// Expects row fields in this order: id, name, state, country, active,
/// `cover_images`. The detail relation is fetched separately.
fn row_to_location(row: &rusqlite::Row<'_>) -> rusqlite::Result<Location> {
    let cover_images: String = row.get(5)?;
    Ok(Location {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        state: row.get(2)?,
        country: row.get(3)?,
        active: row.get(4)?,
        cover_images: json_to_images(&cover_images)?,
        detail: None,
    })
}

/// Helper function to deserialize an experience from a database row.
///
/// Expects row fields in this order: id, title, description, `start_date`,
/// `end_date`, capacity, active, `location_id`.
fn row_to_experience(row: &rusqlite::Row<'_>) -> rusqlite::Result<Experience> {
    let start: String = row.get(3)?;
    let end: String = row.get(4)?;
    Ok(Experience {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        start_date: text_to_date(&start)?,
        end_date: text_to_date(&end)?,
        capacity: row.get(5)?,
        active: row.get(6)?,
        location_id: row.get(7)?,
        detail: None,
    })
}

/// Helper function to deserialize a room type from a database row.
///
/// Expects row fields in this order: id, name, description,
/// `price_per_person`, `price_per_room`, images, `experience_id`,
/// `desired_unit_count`, `capacity_per_unit`.
fn row_to_room_type(row: &rusqlite::Row<'_>) -> rusqlite::Result<RoomType> {
    let images: String = row.get(5)?;
    Ok(RoomType {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        price_per_person: row.get(3)?,
        price_per_room: row.get(4)?,
        images: json_to_images(&images)?,
        experience_id: row.get(6)?,
        desired_unit_count: row.get(7)?,
        capacity_per_unit: row.get(8)?,
    })
}

/// Helper function to deserialize a room unit from a database row.
///
/// Expects row fields in this order: id, `room_type_id`, capacity,
/// occupied, status.
fn row_to_room_unit(row: &rusqlite::Row<'_>) -> rusqlite::Result<RoomUnit> {
    Ok(RoomUnit {
        id: Some(row.get(0)?),
        room_type_id: row.get(1)?,
        capacity: row.get(2)?,
        occupied: row.get(3)?,
        status_code: row.get(4)?,
    })
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `customer_id`, `customer_name`,
/// `customer_email`, `experience_id`, status, `reserved_on`, total,
/// `payment_plan`, `liquidation_date`, `group_booking`, `group_size`,
/// `guest_count`, `price_per_person`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let reserved_on: String = row.get(6)?;
    let liquidation: Option<String> = row.get(9)?;
    let liquidation_date = liquidation.as_deref().map(text_to_date).transpose()?;

    Ok(Reservation {
        id: Some(row.get(0)?),
        customer_id: row.get(1)?,
        customer_name: row.get(2)?,
        customer_email: row.get(3)?,
        experience_id: row.get(4)?,
        status_code: row.get(5)?,
        reserved_on: text_to_date(&reserved_on)?,
        total: row.get(7)?,
        payment_plan: row.get(8)?,
        liquidation_date,
        group: row.get(10)?,
        group_size: row.get(11)?,
        guest_count: row.get(12)?,
        price_per_person: row.get(13)?,
    })
}

// SQL statements for CRUD operations
const INSERT_LOCATION: &str = r"
    INSERT INTO locations (name, state, country, active, cover_images)
    VALUES (?, ?, ?, ?, ?)
";

const UPDATE_LOCATION: &str = r"
    UPDATE locations
    SET name = ?, state = ?, country = ?, active = ?, cover_images = ?
    WHERE id = ?
";

const SELECT_LOCATION: &str = r"
    SELECT id, name, state, country, active, cover_images
    FROM locations
    WHERE id = ?
";

const LIST_LOCATIONS: &str = r"
    SELECT id, name, state, country, active, cover_images
    FROM locations
    ORDER BY name
";

const LIST_ACTIVE_LOCATIONS: &str = r"
    SELECT id, name, state, country, active, cover_images
    FROM locations
    WHERE active = 1
    ORDER BY name
";

const UPSERT_LOCATION_DETAIL: &str = r"
    INSERT OR REPLACE INTO location_details
    (location_id, long_description, history, images)
    VALUES (?, ?, ?, ?)
";

const SELECT_LOCATION_DETAIL: &str = r"
    SELECT long_description, history, images
    FROM location_details
    WHERE location_id = ?
";

const INSERT_EXPERIENCE: &str = r"
    INSERT INTO experiences
    (title, description, start_date, end_date, capacity, active, location_id)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const UPDATE_EXPERIENCE: &str = r"
    UPDATE experiences
    SET title = ?, description = ?, start_date = ?, end_date = ?,
        capacity = ?, active = ?, location_id = ?
    WHERE id = ?
";

const SELECT_EXPERIENCE: &str = r"
    SELECT id, title, description, start_date, end_date, capacity, active, location_id
    FROM experiences
    WHERE id = ?
";

const LIST_EXPERIENCES: &str = r"
    SELECT id, title, description, start_date, end_date, capacity, active, location_id
    FROM experiences
    ORDER BY title
";

const LIST_ACTIVE_EXPERIENCES: &str = r"
    SELECT id, title, description, start_date, end_date, capacity, active, location_id
    FROM experiences
    WHERE active = 1
    ORDER BY title
";

const SELECT_ACTIVE_EXPERIENCE: &str = r"
    SELECT id, title, description, start_date, end_date, capacity, active, location_id
    FROM experiences
    WHERE active = 1
    ORDER BY id
    LIMIT 1
";

const UPSERT_EXPERIENCE_DETAIL: &str = r"
    INSERT OR REPLACE INTO experience_details
    (experience_id, long_description, venue, activities, inclusions, images)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_EXPERIENCE_DETAIL: &str = r"
    SELECT long_description, venue, activities, inclusions, images
    FROM experience_details
    WHERE experience_id = ?
";

const INSERT_ROOM_TYPE: &str = r"
    INSERT INTO room_types
    (name, description, price_per_person, price_per_room, images,
     experience_id, desired_unit_count, capacity_per_unit)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const UPDATE_ROOM_TYPE: &str = r"
    UPDATE room_types
    SET name = ?, description = ?, price_per_person = ?, price_per_room = ?,
        images = ?, experience_id = ?, desired_unit_count = ?, capacity_per_unit = ?
    WHERE id = ?
";

const SELECT_ROOM_TYPE: &str = r"
    SELECT id, name, description, price_per_person, price_per_room, images,
           experience_id, desired_unit_count, capacity_per_unit
    FROM room_types
    WHERE id = ?
";

const LIST_ROOM_TYPES_FOR_EXPERIENCE: &str = r"
    SELECT id, name, description, price_per_person, price_per_room, images,
           experience_id, desired_unit_count, capacity_per_unit
    FROM room_types
    WHERE experience_id = ?
    ORDER BY id
";

const LIST_UNITS_FOR_ROOM_TYPE: &str = r"
    SELECT id, room_type_id, capacity, occupied, status
    FROM room_units
    WHERE room_type_id = ?
    ORDER BY id
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (customer_id, customer_name, customer_email, experience_id, status,
     reserved_on, total, payment_plan, liquidation_date, group_booking,
     group_size, guest_count, price_per_person)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const LIST_RESERVATIONS_FOR_EXPERIENCE: &str = r"
    SELECT id, customer_id, customer_name, customer_email, experience_id,
           status, reserved_on, total, payment_plan, liquidation_date,
           group_booking, group_size, guest_count, price_per_person
    FROM reservations
    WHERE experience_id = ?
    ORDER BY reserved_on
";

impl Database {
    // ----- locations -----

    /// Creates a location, including its detail row when present.
    ///
    /// Returns the new location's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails, or the transaction cannot be committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use posada::{Database, DatabaseConfig, Location};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/posada.db")).unwrap();
    /// let id = db.create_location(&Location::new("Bacalar", "Quintana Roo", "México")).unwrap();
    /// assert!(id > 0);
    /// ```
    pub fn create_location(&mut self, location: &Location) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_LOCATION,
            params![
                location.name,
                location.state,
                location.country,
                location.active,
                images_to_json(&location.cover_images)?,
            ],
        )?;
        let id = tx.last_insert_rowid();

        if let Some(ref detail) = location.detail {
            tx.execute(
                UPSERT_LOCATION_DETAIL,
                params![
                    id,
                    detail.long_description,
                    detail.history,
                    images_to_json(&detail.images)?,
                ],
            )?;
        }

        tx.commit()?;
        Ok(id)
    }

    /// Fetches a location by id, with its detail row if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no location has the given id.
    pub fn get_location(&self, id: i64) -> Result<Location> {
        let mut location = self
            .conn
            .query_row(SELECT_LOCATION, [id], row_to_location)
            .optional()?
            .ok_or_else(|| Error::NotFound {
                resource: format!("location {id}"),
            })?;

        location.detail = self
            .conn
            .query_row(SELECT_LOCATION_DETAIL, [id], |row| {
                let images: String = row.get(2)?;
                Ok(LocationDetail {
                    long_description: row.get(0)?,
                    history: row.get(1)?,
                    images: json_to_images(&images)?,
                })
            })
            .optional()?;

        Ok(location)
    }

    /// Lists all locations ordered by name, without detail rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_locations(&self) -> Result<Vec<Location>> {
        let mut stmt = self.conn.prepare(LIST_LOCATIONS)?;
        let rows = stmt.query_map([], row_to_location)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Lists active locations ordered by name, without detail rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_active_locations(&self) -> Result<Vec<Location>> {
        let mut stmt = self.conn.prepare(LIST_ACTIVE_LOCATIONS)?;
        let rows = stmt.query_map([], row_to_location)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Updates a location and replaces its detail row.
    ///
    /// A missing detail on the value removes any stored detail row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the location has no id, and
    /// [`Error::NotFound`] if no stored location matches it.
    pub fn update_location(&mut self, location: &Location) -> Result<()> {
        let id = location.id.ok_or_else(|| Error::Validation {
            field: "id".into(),
            message: "cannot update a location that has not been persisted".into(),
        })?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let updated = tx.execute(
            UPDATE_LOCATION,
            params![
                location.name,
                location.state,
                location.country,
                location.active,
                images_to_json(&location.cover_images)?,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound {
                resource: format!("location {id}"),
            });
        }

        tx.execute("DELETE FROM location_details WHERE location_id = ?", [id])?;
        if let Some(ref detail) = location.detail {
            tx.execute(
                UPSERT_LOCATION_DETAIL,
                params![
                    id,
                    detail.long_description,
                    detail.history,
                    images_to_json(&detail.images)?,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Deletes a location and its detail row.
    ///
    /// Returns true if a location was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn delete_location(&mut self, id: i64) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM location_details WHERE location_id = ?", [id])?;
        let deleted = tx.execute("DELETE FROM locations WHERE id = ?", [id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    // ----- experiences -----

    /// Creates an experience, including its detail row when present.
    ///
    /// Returns the new experience's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails, or the transaction cannot be committed.
    pub fn create_experience(&mut self, experience: &Experience) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_EXPERIENCE,
            params![
                experience.title,
                experience.description,
                date_to_text(experience.start_date),
                date_to_text(experience.end_date),
                experience.capacity,
                experience.active,
                experience.location_id,
            ],
        )?;
        let id = tx.last_insert_rowid();

        if let Some(ref detail) = experience.detail {
            tx.execute(
                UPSERT_EXPERIENCE_DETAIL,
                params![
                    id,
                    detail.long_description,
                    detail.venue,
                    detail.activities,
                    detail.inclusions,
                    images_to_json(&detail.images)?,
                ],
            )?;
        }

        tx.commit()?;
        Ok(id)
    }

    /// Fetches an experience by id, with its detail row if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no experience has the given id.
    pub fn get_experience(&self, id: i64) -> Result<Experience> {
        let mut experience = self
            .conn
            .query_row(SELECT_EXPERIENCE, [id], row_to_experience)
            .optional()?
            .ok_or_else(|| Error::NotFound {
                resource: format!("experience {id}"),
            })?;

        experience.detail = self.fetch_experience_detail(id)?;
        Ok(experience)
    }

    fn fetch_experience_detail(&self, id: i64) -> Result<Option<ExperienceDetail>> {
        self.conn
            .query_row(SELECT_EXPERIENCE_DETAIL, [id], |row| {
                let images: String = row.get(4)?;
                Ok(ExperienceDetail {
                    long_description: row.get(0)?,
                    venue: row.get(1)?,
                    activities: row.get(2)?,
                    inclusions: row.get(3)?,
                    images: json_to_images(&images)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Lists all experiences ordered by title, without detail rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_experiences(&self) -> Result<Vec<Experience>> {
        let mut stmt = self.conn.prepare(LIST_EXPERIENCES)?;
        let rows = stmt.query_map([], row_to_experience)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Lists active experiences ordered by title, without detail rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_active_experiences(&self) -> Result<Vec<Experience>> {
        let mut stmt = self.conn.prepare(LIST_ACTIVE_EXPERIENCES)?;
        let rows = stmt.query_map([], row_to_experience)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Fetches the currently offered experience, with its detail.
    ///
    /// Returns `Ok(None)` when no experience is active; an empty catalog
    /// is a normal state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_active_experience(&self) -> Result<Option<Experience>> {
        let experience = self
            .conn
            .query_row(SELECT_ACTIVE_EXPERIENCE, [], row_to_experience)
            .optional()?;

        match experience {
            Some(mut exp) => {
                if let Some(id) = exp.id {
                    exp.detail = self.fetch_experience_detail(id)?;
                }
                Ok(Some(exp))
            }
            None => Ok(None),
        }
    }

    /// Updates an experience and replaces its detail row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the experience has no id, and
    /// [`Error::NotFound`] if no stored experience matches it.
    pub fn update_experience(&mut self, experience: &Experience) -> Result<()> {
        let id = experience.id.ok_or_else(|| Error::Validation {
            field: "id".into(),
            message: "cannot update an experience that has not been persisted".into(),
        })?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let updated = tx.execute(
            UPDATE_EXPERIENCE,
            params![
                experience.title,
                experience.description,
                date_to_text(experience.start_date),
                date_to_text(experience.end_date),
                experience.capacity,
                experience.active,
                experience.location_id,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound {
                resource: format!("experience {id}"),
            });
        }

        tx.execute(
            "DELETE FROM experience_details WHERE experience_id = ?",
            [id],
        )?;
        if let Some(ref detail) = experience.detail {
            tx.execute(
                UPSERT_EXPERIENCE_DETAIL,
                params![
                    id,
                    detail.long_description,
                    detail.venue,
                    detail.activities,
                    detail.inclusions,
                    images_to_json(&detail.images)?,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Deletes an experience and its detail row.
    ///
    /// Returns true if an experience was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn delete_experience(&mut self, id: i64) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            "DELETE FROM experience_details WHERE experience_id = ?",
            [id],
        )?;
        let deleted = tx.execute("DELETE FROM experiences WHERE id = ?", [id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    // ----- room types and units -----

    /// Creates a room type and its initial batch of units.
    ///
    /// The declared unit count is materialized immediately: that many
    /// fresh units (no occupants, available status, the declared
    /// capacity) are inserted in the same transaction. Returns the new
    /// room type's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails, or the transaction cannot be committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use posada::{Database, DatabaseConfig, RoomType};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/posada.db")).unwrap();
    /// let id = db.create_room_type(&RoomType::new("Double Room", 10, 2)).unwrap();
    /// assert_eq!(db.list_units_for_room_type(id).unwrap().len(), 10);
    /// ```
    pub fn create_room_type(&mut self, room_type: &RoomType) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_ROOM_TYPE,
            params![
                room_type.name,
                room_type.description,
                room_type.price_per_person,
                room_type.price_per_room,
                images_to_json(&room_type.images)?,
                room_type.experience_id,
                room_type.desired_unit_count,
                room_type.capacity_per_unit,
            ],
        )?;
        let id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(INSERT_ROOM_UNIT)?;
            for _ in 0..room_type.desired_unit_count {
                let unit = RoomUnit::fresh(id, room_type.capacity_per_unit);
                stmt.execute(params![
                    unit.room_type_id,
                    unit.capacity,
                    unit.occupied,
                    unit.status_code,
                ])?;
            }
        }

        tx.commit()?;
        Ok(id)
    }

    /// Fetches a room type by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no room type has the given id.
    pub fn get_room_type(&self, id: i64) -> Result<RoomType> {
        self.conn
            .query_row(SELECT_ROOM_TYPE, [id], row_to_room_type)
            .optional()?
            .ok_or_else(|| Error::NotFound {
                resource: format!("room type {id}"),
            })
    }

    /// Lists the room types declared for an experience, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_room_types_for_experience(&self, experience_id: i64) -> Result<Vec<RoomType>> {
        let mut stmt = self.conn.prepare(LIST_ROOM_TYPES_FOR_EXPERIENCE)?;
        let rows = stmt.query_map([experience_id], row_to_room_type)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Updates a room type's fields.
    ///
    /// Only the room type row is touched. When the declared unit count or
    /// capacity changed, run a reconcile plan afterwards to bring the
    /// units in line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the room type has no id, and
    /// [`Error::NotFound`] if no stored room type matches it.
    pub fn update_room_type(&mut self, room_type: &RoomType) -> Result<()> {
        let id = room_type.id.ok_or_else(|| Error::Validation {
            field: "id".into(),
            message: "cannot update a room type that has not been persisted".into(),
        })?;

        let updated = self.conn.execute(
            UPDATE_ROOM_TYPE,
            params![
                room_type.name,
                room_type.description,
                room_type.price_per_person,
                room_type.price_per_room,
                images_to_json(&room_type.images)?,
                room_type.experience_id,
                room_type.desired_unit_count,
                room_type.capacity_per_unit,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound {
                resource: format!("room type {id}"),
            });
        }
        Ok(())
    }

    /// Deletes a room type record.
    ///
    /// Use a [`RemoveRoomTypePlan`](crate::operations::RemoveRoomTypePlan)
    /// to also remove its units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no room type has the given id.
    pub fn delete_room_type(&mut self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM room_types WHERE id = ?", [id])?;
        if deleted == 0 {
            return Err(Error::NotFound {
                resource: format!("room type {id}"),
            });
        }
        Ok(())
    }

    /// Lists a room type's units in id order (oldest first).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_units_for_room_type(&self, room_type_id: i64) -> Result<Vec<RoomUnit>> {
        let mut stmt = self.conn.prepare(LIST_UNITS_FOR_ROOM_TYPE)?;
        let rows = stmt.query_map([room_type_id], row_to_room_unit)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    // ----- reservations -----

    /// Creates a reservation. Returns the new reservation's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_reservation(&mut self, reservation: &Reservation) -> Result<i64> {
        self.conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.customer_id,
                reservation.customer_name,
                reservation.customer_email,
                reservation.experience_id,
                reservation.status_code,
                date_to_text(reservation.reserved_on),
                reservation.total,
                reservation.payment_plan,
                reservation.liquidation_date.map(date_to_text),
                reservation.group,
                reservation.group_size,
                reservation.guest_count,
                reservation.price_per_person,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Lists an experience's reservations ordered by booking date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_for_experience(&self, experience_id: i64) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS_FOR_EXPERIENCE)?;
        let rows = stmt.query_map([experience_id], row_to_reservation)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Deletes a reservation. Returns true if one was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation(&mut self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM reservations WHERE id = ?", [id])?;
        Ok(deleted > 0)
    }

    // ----- derived views -----

    /// Builds the room status view for an experience: each room type with
    /// its units and a freshly computed occupancy snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub fn room_status_for_experience(&self, experience_id: i64) -> Result<Vec<RoomTypeStatus>> {
        let room_types = self.list_room_types_for_experience(experience_id)?;
        let mut statuses = Vec::with_capacity(room_types.len());

        for room_type in room_types {
            let units = match room_type.id {
                Some(id) => self.list_units_for_room_type(id)?,
                None => Vec::new(),
            };
            let stats = compute_occupancy(
                &units,
                room_type.desired_unit_count,
                room_type.capacity_per_unit,
            );
            statuses.push(RoomTypeStatus {
                room_type,
                units,
                stats,
            });
        }

        Ok(statuses)
    }

    /// Computes reservation metrics for an experience.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation query fails.
    pub fn metrics_for_experience(&self, experience_id: i64) -> Result<ReservationMetrics> {
        let reservations = self.list_reservations_for_experience(experience_id)?;
        Ok(compute_metrics(&reservations))
    }
}
