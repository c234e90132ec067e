//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Experience, Location};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates an active test location with the given name.
#[must_use]
pub fn sample_location(name: &str) -> Location {
    Location::new(name, "Quintana Roo", "México")
}

/// Creates an active test experience with the given title.
///
/// # Panics
///
/// Panics if the fixed test dates are invalid, which cannot happen.
#[must_use]
pub fn sample_experience(title: &str) -> Experience {
    Experience::new(
        title,
        "Three days on the water",
        NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        40,
    )
}
