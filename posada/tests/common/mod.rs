//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the posada library.

use chrono::NaiveDate;
use posada::{Database, DatabaseConfig, Experience, Reservation, ReservationStatus, RoomType};

/// Creates a test database in a temporary location.
///
/// The backing directory is leaked for the lifetime of the test process
/// so the database file outlives the returned handle.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();
    std::mem::forget(dir);
    db
}

/// Creates an active experience fixture in the database, returning its id.
#[allow(dead_code)]
pub fn create_test_experience(db: &mut Database, title: &str) -> i64 {
    let experience = Experience::new(
        title,
        "Fixture experience",
        NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        40,
    );
    db.create_experience(&experience).unwrap()
}

/// Creates a room type with its initial units, returning its id.
#[allow(dead_code)]
pub fn create_test_room_type(
    db: &mut Database,
    experience_id: i64,
    units: u32,
    capacity: u32,
) -> i64 {
    let room_type = RoomType::new("Fixture Room", units, capacity).for_experience(experience_id);
    db.create_room_type(&room_type).unwrap()
}

/// Builder for creating test reservations with sensible defaults.
#[allow(dead_code)]
pub struct ReservationFixture {
    name: String,
    email: String,
    experience_id: i64,
    status: ReservationStatus,
    total: f64,
    group_size: Option<u32>,
}

#[allow(dead_code)]
impl ReservationFixture {
    pub fn new(experience_id: i64) -> Self {
        Self {
            name: "Test Customer".to_string(),
            email: "customer@example.com".to_string(),
            experience_id,
            status: ReservationStatus::Pending,
            total: 0.0,
            group_size: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub fn as_group(mut self, size: u32) -> Self {
        self.group_size = Some(size);
        self
    }

    pub fn build(self) -> Reservation {
        let mut builder = Reservation::builder(self.name, self.email, self.experience_id)
            .status(self.status)
            .reserved_on(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap())
            .total(self.total);
        if let Some(size) = self.group_size {
            builder = builder.group(size);
        }
        builder.build().unwrap()
    }
}
