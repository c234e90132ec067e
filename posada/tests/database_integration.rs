//! Integration tests for the persistence layer and derived views.
//!
//! This test suite verifies the full admin workflow against a real
//! database file: catalog CRUD, inventory materialization, and the
//! occupancy and metrics views.

mod common;
use common::{
    create_test_database, create_test_experience, create_test_room_type, ReservationFixture,
};

use posada::{
    DatabaseConfig, ExperienceDetail, Location, LocationDetail, ReservationStatus, RoomType,
};

#[test]
fn test_location_lifecycle() {
    let mut db = create_test_database();

    let location = Location::new("Bacalar", "Quintana Roo", "México").with_detail(LocationDetail {
        long_description: "A lagoon of seven colors".to_string(),
        history: "Founded as a fort town".to_string(),
        images: vec!["fort.jpg".to_string()],
    });
    let id = db.create_location(&location).unwrap();

    let mut stored = db.get_location(id).unwrap();
    assert_eq!(stored.detail.as_ref().unwrap().images.len(), 1);

    stored.active = false;
    db.update_location(&stored).unwrap();
    assert!(db.list_active_locations().unwrap().is_empty());
    assert_eq!(db.list_locations().unwrap().len(), 1);

    assert!(db.delete_location(id).unwrap());
    assert!(db.get_location(id).unwrap_err().is_not_found());
}

#[test]
fn test_experience_detail_round_trip() {
    let mut db = create_test_database();
    let exp_id = create_test_experience(&mut db, "Lagoon Retreat");

    let mut stored = db.get_experience(exp_id).unwrap();
    assert!(stored.detail.is_none());

    stored.detail = Some(ExperienceDetail {
        long_description: "Full itinerary".to_string(),
        venue: "Casa del Lago".to_string(),
        activities: "Kayak, sailing".to_string(),
        inclusions: "Meals and lodging".to_string(),
        images: vec!["lake.jpg".to_string()],
    });
    db.update_experience(&stored).unwrap();

    let fetched = db.get_experience(exp_id).unwrap();
    assert_eq!(fetched.detail.unwrap().venue, "Casa del Lago");
}

#[test]
fn test_room_status_reflects_occupancy() {
    let mut db = create_test_database();
    let exp_id = create_test_experience(&mut db, "Lagoon Retreat");
    let rt_id = create_test_room_type(&mut db, exp_id, 3, 2);

    // Book one unit full and one partially.
    let units = db.list_units_for_room_type(rt_id).unwrap();
    db.connection()
        .execute(
            "UPDATE room_units SET occupied = 2 WHERE id = ?",
            [units[0].id.unwrap()],
        )
        .unwrap();
    db.connection()
        .execute(
            "UPDATE room_units SET occupied = 1 WHERE id = ?",
            [units[1].id.unwrap()],
        )
        .unwrap();

    let statuses = db.room_status_for_experience(exp_id).unwrap();
    assert_eq!(statuses.len(), 1);
    let stats = &statuses[0].stats;
    assert_eq!(stats.total_capacity, 6);
    assert_eq!(stats.total_occupied, 3);
    assert_eq!(stats.total_available, 3);
    assert_eq!(stats.occupancy_percent, 50.0);
    assert_eq!(stats.full_units, 1);
    assert_eq!(stats.partial_units, 1);
    assert_eq!(stats.empty_units, 1);
}

#[test]
fn test_metrics_over_mixed_reservations() {
    let mut db = create_test_database();
    let exp_id = create_test_experience(&mut db, "Lagoon Retreat");
    let other_exp = create_test_experience(&mut db, "Mountain Retreat");

    db.create_reservation(
        &ReservationFixture::new(exp_id)
            .with_email("ana@example.com")
            .with_status(ReservationStatus::Confirmed)
            .with_total(100.0)
            .build(),
    )
    .unwrap();
    db.create_reservation(
        &ReservationFixture::new(exp_id)
            .with_email("ben@example.com")
            .with_total(200.0)
            .as_group(4)
            .build(),
    )
    .unwrap();
    // A booking on a different experience must not leak in.
    db.create_reservation(
        &ReservationFixture::new(other_exp)
            .with_total(999.0)
            .build(),
    )
    .unwrap();

    let metrics = db.metrics_for_experience(exp_id).unwrap();
    assert_eq!(metrics.total_count, 2);
    assert_eq!(metrics.total_revenue, 300.0);
    assert_eq!(metrics.confirmed_count, 1);
    assert_eq!(metrics.pending_count, 1);
    assert_eq!(metrics.group_count, 1);
    assert_eq!(metrics.individual_count, 1);
    assert_eq!(metrics.total_headcount, 5);
    assert_eq!(metrics.unique_customers, 2);
}

#[test]
fn test_database_reopens_with_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posada.db");

    let exp_id = {
        let mut db = posada::Database::open(DatabaseConfig::new(&path)).unwrap();
        let id = create_test_experience(&mut db, "Lagoon Retreat");
        db.create_room_type(&RoomType::new("Double Room", 2, 2).for_experience(id))
            .unwrap();
        id
    };

    let db = posada::Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
    let statuses = db.room_status_for_experience(exp_id).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].units.len(), 2);
}
