//! Room inventory types.
//!
//! A [`RoomType`] is a bookable room category declared against an
//! experience; each physical instance of it is tracked as a [`RoomUnit`]
//! with its own capacity and occupant count. The declared
//! `desired_unit_count` on the room type and the number of persisted
//! units may disagree between edits; the inventory adjuster
//! (`operations::reconcile`) brings them back in line.

use serde::{Deserialize, Serialize};

use crate::stats::OccupancyStats;
use crate::status::UnitStatus;

/// A bookable room category within an experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    /// Row identifier; `None` until the room type is persisted.
    pub id: Option<i64>,
    /// Display name (e.g. "Double Room").
    pub name: String,
    /// Short description.
    pub description: String,
    /// Price per person.
    pub price_per_person: f64,
    /// Price per whole room.
    pub price_per_room: f64,
    /// Image references.
    pub images: Vec<String>,
    /// Owning experience, if assigned.
    pub experience_id: Option<i64>,
    /// Declared number of bookable units.
    pub desired_unit_count: u32,
    /// Capacity each unit should carry.
    pub capacity_per_unit: u32,
}

impl RoomType {
    /// Creates a room type with the given name, declared unit count,
    /// and per-unit capacity. Prices default to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::RoomType;
    ///
    /// let rt = RoomType::new("Double Room", 10, 2);
    /// assert_eq!(rt.desired_unit_count, 10);
    /// assert_eq!(rt.capacity_per_unit, 2);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, desired_unit_count: u32, capacity_per_unit: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            price_per_person: 0.0,
            price_per_room: 0.0,
            images: Vec::new(),
            experience_id: None,
            desired_unit_count,
            capacity_per_unit,
        }
    }

    /// Associates the room type with an experience.
    #[must_use]
    pub const fn for_experience(mut self, experience_id: i64) -> Self {
        self.experience_id = Some(experience_id);
        self
    }
}

/// One concrete bookable instance of a room type.
///
/// The `capacity` field is copied from the room type at creation and may
/// drift until a capacity sync runs; the `occupied` count is mutated by
/// booking flows outside this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomUnit {
    /// Row identifier; `None` until the unit is persisted.
    pub id: Option<i64>,
    /// Owning room type.
    pub room_type_id: i64,
    /// How many occupants this unit holds when full.
    pub capacity: u32,
    /// Current occupant count.
    pub occupied: u32,
    /// Raw status code as persisted; see [`RoomUnit::status`].
    pub status_code: i32,
}

impl RoomUnit {
    /// Creates an empty, available unit for a room type.
    ///
    /// This is the template used when units are created in batches for a
    /// new room type or a grown unit count.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::{RoomUnit, UnitStatus};
    ///
    /// let unit = RoomUnit::fresh(7, 2);
    /// assert_eq!(unit.occupied, 0);
    /// assert_eq!(unit.status(), Some(UnitStatus::Available));
    /// ```
    #[must_use]
    pub const fn fresh(room_type_id: i64, capacity: u32) -> Self {
        Self {
            id: None,
            room_type_id,
            capacity,
            occupied: 0,
            status_code: UnitStatus::Available.code(),
        }
    }

    /// Returns the named status, or `None` for an unknown stored code.
    #[must_use]
    pub const fn status(&self) -> Option<UnitStatus> {
        UnitStatus::from_code(self.status_code)
    }

    /// Sets the status from a named variant.
    pub fn set_status(&mut self, status: UnitStatus) {
        self.status_code = status.code();
    }

    /// True if the unit has no occupants.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// True if the unit's occupant count has reached its own capacity.
    ///
    /// The comparison uses the unit's capacity field, not the room
    /// type's nominal one; the two may disagree until a capacity sync.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }
}

/// A room type together with its units and a freshly computed
/// occupancy snapshot.
///
/// This is a derived view; the statistics are recomputed on demand and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeStatus {
    /// The room type.
    pub room_type: RoomType,
    /// Its persisted units.
    pub units: Vec<RoomUnit>,
    /// Occupancy statistics over those units.
    pub stats: OccupancyStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_new() {
        let rt = RoomType::new("Double Room", 10, 2).for_experience(5);
        assert_eq!(rt.name, "Double Room");
        assert_eq!(rt.experience_id, Some(5));
        assert!(rt.id.is_none());
        assert_eq!(rt.price_per_person, 0.0);
    }

    #[test]
    fn test_fresh_unit() {
        let unit = RoomUnit::fresh(3, 4);
        assert_eq!(unit.room_type_id, 3);
        assert_eq!(unit.capacity, 4);
        assert_eq!(unit.occupied, 0);
        assert!(unit.is_empty());
        assert!(!unit.is_full());
        assert_eq!(unit.status(), Some(UnitStatus::Available));
    }

    #[test]
    fn test_unit_full_against_own_capacity() {
        let mut unit = RoomUnit::fresh(3, 4);
        unit.occupied = 4;
        assert!(unit.is_full());

        // Stale per-unit capacity still drives the classification.
        unit.capacity = 2;
        unit.occupied = 2;
        assert!(unit.is_full());
    }

    #[test]
    fn test_unit_unknown_status_code() {
        let mut unit = RoomUnit::fresh(1, 2);
        unit.status_code = 99;
        assert_eq!(unit.status(), None);
    }

    #[test]
    fn test_unit_set_status() {
        let mut unit = RoomUnit::fresh(1, 2);
        unit.set_status(UnitStatus::Unavailable);
        assert_eq!(unit.status(), Some(UnitStatus::Unavailable));
        assert_eq!(unit.status_code, 2);
    }

    #[test]
    fn test_room_unit_serde() {
        let unit = RoomUnit::fresh(3, 4);
        let json = serde_json::to_string(&unit).unwrap();
        let back: RoomUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
