//! Named status enumerations with explicit integer code mappings.
//!
//! The persisted rows carry bare integer status codes. These enums give
//! the known codes names and make the unknown case explicit: decoding
//! goes through `from_code`, which returns `None` for any code that has
//! no named variant instead of silently misreading it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a reservation.
///
/// Stored as an integer code: 1 = confirmed, 2 = pending, 3 = cancelled.
///
/// # Examples
///
/// ```
/// use posada::ReservationStatus;
///
/// assert_eq!(ReservationStatus::Confirmed.code(), 1);
/// assert_eq!(ReservationStatus::from_code(2), Some(ReservationStatus::Pending));
/// assert_eq!(ReservationStatus::from_code(9), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// The reservation is confirmed.
    Confirmed,
    /// The reservation is awaiting confirmation.
    Pending,
    /// The reservation was cancelled.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the integer code used in persisted rows.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Confirmed => 1,
            Self::Pending => 2,
            Self::Cancelled => 3,
        }
    }

    /// Maps an integer code to its named variant.
    ///
    /// Returns `None` for codes with no named variant. Callers decide
    /// whether an unknown code is an error or simply falls outside the
    /// known partitions (reservation metrics take the latter view).
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Confirmed),
            2 => Some(Self::Pending),
            3 => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Pending => write!(f, "pending"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Availability status of a room unit.
///
/// Stored as an integer code: 1 = available, 2 = unavailable.
///
/// # Examples
///
/// ```
/// use posada::UnitStatus;
///
/// assert_eq!(UnitStatus::Available.code(), 1);
/// assert_eq!(UnitStatus::from_code(2), Some(UnitStatus::Unavailable));
/// assert_eq!(UnitStatus::from_code(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    /// The unit can accept occupants.
    Available,
    /// The unit is withdrawn from booking.
    Unavailable,
}

impl UnitStatus {
    /// Returns the integer code used in persisted rows.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Available => 1,
            Self::Unavailable => 2,
        }
    }

    /// Maps an integer code to its named variant.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Available),
            2 => Some(Self::Unavailable),
            _ => None,
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_status_round_trip() {
        for status in [
            ReservationStatus::Confirmed,
            ReservationStatus::Pending,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(ReservationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_reservation_status_unknown_codes() {
        assert_eq!(ReservationStatus::from_code(0), None);
        assert_eq!(ReservationStatus::from_code(4), None);
        assert_eq!(ReservationStatus::from_code(-1), None);
    }

    #[test]
    fn test_reservation_status_display() {
        assert_eq!(format!("{}", ReservationStatus::Confirmed), "confirmed");
        assert_eq!(format!("{}", ReservationStatus::Pending), "pending");
        assert_eq!(format!("{}", ReservationStatus::Cancelled), "cancelled");
    }

    #[test]
    fn test_unit_status_round_trip() {
        for status in [UnitStatus::Available, UnitStatus::Unavailable] {
            assert_eq!(UnitStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_unit_status_unknown_codes() {
        assert_eq!(UnitStatus::from_code(0), None);
        assert_eq!(UnitStatus::from_code(3), None);
    }

    #[test]
    fn test_unit_status_display() {
        assert_eq!(format!("{}", UnitStatus::Available), "available");
        assert_eq!(format!("{}", UnitStatus::Unavailable), "unavailable");
    }
}
