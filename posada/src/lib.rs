#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # posada
//!
//! A library for managing experience bookings, room inventory, and
//! occupancy metrics.
//!
//! This library provides the domain model and persistence layer for a
//! small travel-booking operation: destinations, bookable experiences,
//! room inventory with per-unit occupancy, and customer reservations,
//! plus the pure calculators that summarize them.
//!
//! ## Core Types
//!
//! - [`Location`] and [`Experience`]: the booking catalog
//! - [`RoomType`] and [`RoomUnit`]: room inventory
//! - [`Reservation`]: customer bookings
//! - [`stats`]: occupancy and reservation metrics calculators
//! - [`operations`]: plan-execute inventory reconciliation
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use posada::stats::compute_occupancy;
//! use posada::RoomUnit;
//!
//! let mut units = vec![RoomUnit::fresh(1, 2), RoomUnit::fresh(1, 2)];
//! units[0].occupied = 2;
//!
//! let stats = compute_occupancy(&units, 2, 2);
//! assert_eq!(stats.total_occupied, 2);
//! assert_eq!(stats.occupancy_percent, 50.0);
//! assert_eq!(stats.full_units, 1);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod experience;
pub mod location;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod room;
pub mod stats;
pub mod status;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use experience::{Experience, ExperienceDetail};
pub use location::{Location, LocationDetail};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    reconcile_units, ExecutionResult, OperationPlan, PlanAction, PlanExecutor, ReconcileOptions,
    ReconcilePlan, RemoveRoomTypeOptions, RemoveRoomTypePlan, UnitReconciliation,
};
pub use reservation::{Reservation, ReservationBuilder, ValidationError};
pub use room::{RoomType, RoomTypeStatus, RoomUnit};
pub use stats::{compute_metrics, compute_occupancy, OccupancyStats, ReservationMetrics};
pub use status::{ReservationStatus, UnitStatus};
