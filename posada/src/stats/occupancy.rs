//! Occupancy statistics for a room type's units.

use serde::{Deserialize, Serialize};

use crate::room::RoomUnit;

/// A computed occupancy snapshot for one room type.
///
/// Derived on demand from the room type's declared shape and its
/// persisted units; never stored.
///
/// Capacity is taken from the DECLARED unit count on the room type, not
/// from however many units currently exist, so a half-finished
/// reconciliation shows up here rather than being papered over. For the
/// same reason `total_available` is signed and never clamped: a negative
/// value means more occupants are recorded than the declared shape can
/// hold, which callers surface as a data-integrity signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyStats {
    /// Declared capacity: `desired_unit_count * capacity_per_unit`.
    pub total_capacity: u32,
    /// Sum of occupant counts across the units.
    pub total_occupied: u32,
    /// `total_capacity - total_occupied`; negative when overbooked.
    pub total_available: i64,
    /// Occupied share of declared capacity, rounded to two decimals.
    /// Zero when the declared capacity is zero.
    pub occupancy_percent: f64,
    /// Units whose occupant count equals their own capacity.
    pub full_units: u32,
    /// Units that are neither full nor empty.
    pub partial_units: u32,
    /// Units with no occupants.
    pub empty_units: u32,
}

/// Computes occupancy statistics for a room type's units.
///
/// Each unit is classified against its OWN capacity field, which may lag
/// the room type's nominal capacity between a count edit and the next
/// capacity sync.
///
/// # Examples
///
/// ```
/// use posada::stats::compute_occupancy;
/// use posada::RoomUnit;
///
/// let mut units = vec![RoomUnit::fresh(1, 2), RoomUnit::fresh(1, 2)];
/// units[0].occupied = 2;
/// units[1].occupied = 1;
///
/// let stats = compute_occupancy(&units, 3, 2);
/// assert_eq!(stats.total_capacity, 6);
/// assert_eq!(stats.total_occupied, 3);
/// assert_eq!(stats.total_available, 3);
/// assert_eq!(stats.occupancy_percent, 50.0);
/// assert_eq!(stats.full_units, 1);
/// assert_eq!(stats.partial_units, 1);
/// assert_eq!(stats.empty_units, 0);
/// ```
#[must_use]
pub fn compute_occupancy(
    units: &[RoomUnit],
    desired_unit_count: u32,
    capacity_per_unit: u32,
) -> OccupancyStats {
    let total_capacity = desired_unit_count * capacity_per_unit;
    let total_occupied: u32 = units.iter().map(|u| u.occupied).sum();
    let total_available = i64::from(total_capacity) - i64::from(total_occupied);

    let occupancy_percent = if total_capacity > 0 {
        round2(100.0 * f64::from(total_occupied) / f64::from(total_capacity))
    } else {
        0.0
    };

    let mut full_units = 0;
    let mut partial_units = 0;
    let mut empty_units = 0;
    for unit in units {
        if unit.is_empty() {
            empty_units += 1;
        } else if unit.is_full() {
            full_units += 1;
        } else {
            partial_units += 1;
        }
    }

    OccupancyStats {
        total_capacity,
        total_occupied,
        total_available,
        occupancy_percent,
        full_units,
        partial_units,
        empty_units,
    }
}

/// Rounds half-up to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(capacity: u32, occupied: u32) -> RoomUnit {
        let mut u = RoomUnit::fresh(1, capacity);
        u.occupied = occupied;
        u
    }

    #[test]
    fn test_empty_unit_list() {
        let stats = compute_occupancy(&[], 3, 2);
        assert_eq!(stats.total_capacity, 6);
        assert_eq!(stats.total_occupied, 0);
        assert_eq!(stats.total_available, 6);
        assert_eq!(stats.occupancy_percent, 0.0);
        assert_eq!(stats.full_units, 0);
        assert_eq!(stats.partial_units, 0);
        assert_eq!(stats.empty_units, 0);
    }

    #[test]
    fn test_zero_declared_capacity_gives_zero_percent() {
        let stats = compute_occupancy(&[unit(2, 2)], 0, 2);
        assert_eq!(stats.total_capacity, 0);
        assert_eq!(stats.total_occupied, 2);
        assert_eq!(stats.occupancy_percent, 0.0);

        let stats = compute_occupancy(&[unit(2, 1)], 3, 0);
        assert_eq!(stats.total_capacity, 0);
        assert_eq!(stats.occupancy_percent, 0.0);
    }

    #[test]
    fn test_capacity_uses_declared_count_not_unit_list() {
        // Two units exist but five are declared.
        let stats = compute_occupancy(&[unit(2, 0), unit(2, 0)], 5, 2);
        assert_eq!(stats.total_capacity, 10);
        assert_eq!(stats.total_available, 10);
    }

    #[test]
    fn test_available_goes_negative_when_overbooked() {
        let stats = compute_occupancy(&[unit(2, 4), unit(2, 3)], 2, 2);
        assert_eq!(stats.total_capacity, 4);
        assert_eq!(stats.total_occupied, 7);
        assert_eq!(stats.total_available, -3);
    }

    #[test]
    fn test_classification_exclusive_and_exhaustive() {
        let units = vec![unit(2, 0), unit(2, 1), unit(2, 2), unit(4, 4), unit(4, 3)];
        let stats = compute_occupancy(&units, 5, 2);
        assert_eq!(stats.empty_units, 1);
        assert_eq!(stats.partial_units, 2);
        assert_eq!(stats.full_units, 2);
        assert_eq!(
            (stats.full_units + stats.partial_units + stats.empty_units) as usize,
            units.len()
        );
    }

    #[test]
    fn test_classification_against_unit_own_capacity() {
        // Unit capacity 3 differs from the nominal 2; fullness follows
        // the unit's own field.
        let stats = compute_occupancy(&[unit(3, 3)], 1, 2);
        assert_eq!(stats.full_units, 1);
        assert_eq!(stats.partial_units, 0);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 1/3 of 100 = 33.333... -> 33.33
        let stats = compute_occupancy(&[unit(3, 1)], 1, 3);
        assert_eq!(stats.occupancy_percent, 33.33);

        // 2/3 of 100 = 66.666... -> 66.67
        let stats = compute_occupancy(&[unit(3, 2)], 1, 3);
        assert_eq!(stats.occupancy_percent, 66.67);

        // 1/8 of 100 = 12.5 exactly at the half boundary after scaling:
        // 12.50 stays 12.5
        let stats = compute_occupancy(&[unit(8, 1)], 1, 8);
        assert_eq!(stats.occupancy_percent, 12.5);
    }

    #[test]
    fn test_conservation() {
        let units = vec![unit(2, 1), unit(2, 2), unit(2, 0)];
        let stats = compute_occupancy(&units, 3, 2);
        assert_eq!(
            i64::from(stats.total_occupied) + stats.total_available,
            i64::from(stats.total_capacity)
        );
    }
}
