//! Database layer for persistent storage of the booking catalog.
//!
//! This module provides a SQLite-based storage layer for locations,
//! experiences, room inventory, and reservations, including connection
//! management, schema versioning, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use posada::database::{Database, DatabaseConfig};
//! use posada::{Experience, RoomType};
//! use chrono::NaiveDate;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/posada.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Create an experience and a room type with its units
//! let experience = Experience::new(
//!     "Lagoon Retreat",
//!     "Three days on the water",
//!     NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
//!     40,
//! );
//! let exp_id = db.create_experience(&experience).unwrap();
//! db.create_room_type(&RoomType::new("Double Room", 10, 2).for_experience(exp_id)).unwrap();
//!
//! // Inspect occupancy
//! for status in db.room_status_for_experience(exp_id).unwrap() {
//!     println!("{}: {}%", status.room_type.name, status.stats.occupancy_percent);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;
mod transaction;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{
    check_schema_compatibility, get_schema_version, initialize_schema, verify_schema_version,
};
