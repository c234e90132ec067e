//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the posada booking system.
//!
//! Image lists are stored as JSON text columns; dates as `%Y-%m-%d` text.
//! The one-row detail tables key directly on their parent id.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the locations table.
pub const CREATE_LOCATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS locations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        state TEXT NOT NULL,
        country TEXT NOT NULL,
        active INTEGER NOT NULL DEFAULT 1,
        cover_images TEXT NOT NULL DEFAULT '[]'
    )";

/// SQL statement to create the location detail table.
///
/// At most one detail row exists per location; the parent id is the
/// primary key.
pub const CREATE_LOCATION_DETAILS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS location_details (
        location_id INTEGER PRIMARY KEY NOT NULL,
        long_description TEXT NOT NULL,
        history TEXT NOT NULL,
        images TEXT NOT NULL DEFAULT '[]'
    )";

/// SQL statement to create the experiences table.
pub const CREATE_EXPERIENCES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS experiences (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        active INTEGER NOT NULL DEFAULT 1,
        location_id INTEGER
    )";

/// SQL statement to create the experience detail table.
pub const CREATE_EXPERIENCE_DETAILS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS experience_details (
        experience_id INTEGER PRIMARY KEY NOT NULL,
        long_description TEXT NOT NULL,
        venue TEXT NOT NULL,
        activities TEXT NOT NULL,
        inclusions TEXT NOT NULL,
        images TEXT NOT NULL DEFAULT '[]'
    )";

/// SQL statement to create the room types table.
pub const CREATE_ROOM_TYPES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_types (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price_per_person REAL NOT NULL DEFAULT 0,
        price_per_room REAL NOT NULL DEFAULT 0,
        images TEXT NOT NULL DEFAULT '[]',
        experience_id INTEGER,
        desired_unit_count INTEGER NOT NULL,
        capacity_per_unit INTEGER NOT NULL
    )";

/// SQL statement to create the room units table.
///
/// Room ids are monotonically increasing, which the reconciliation
/// planner relies on to identify the newest units.
pub const CREATE_ROOM_UNITS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_units (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        room_type_id INTEGER NOT NULL,
        capacity INTEGER NOT NULL,
        occupied INTEGER NOT NULL DEFAULT 0,
        status INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the reservations table.
///
/// `group_booking` avoids the reserved word GROUP.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id TEXT,
        customer_name TEXT NOT NULL,
        customer_email TEXT NOT NULL,
        experience_id INTEGER NOT NULL,
        status INTEGER NOT NULL,
        reserved_on TEXT NOT NULL,
        total REAL NOT NULL DEFAULT 0,
        payment_plan INTEGER NOT NULL DEFAULT 0,
        liquidation_date TEXT,
        group_booking INTEGER NOT NULL DEFAULT 0,
        group_size INTEGER,
        guest_count INTEGER,
        price_per_person REAL
    )";

/// SQL statement to create an index on room unit ownership.
///
/// This index speeds up unit listings and cascade deletions per room type.
pub const CREATE_UNIT_ROOM_TYPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_room_units_room_type ON room_units(room_type_id)";

/// SQL statement to create an index on room type ownership.
pub const CREATE_ROOM_TYPE_EXPERIENCE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_room_types_experience ON room_types(experience_id)";

/// SQL statement to create an index on reservation ownership.
///
/// This index speeds up the per-experience metrics queries.
pub const CREATE_RESERVATION_EXPERIENCE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_experience ON reservations(experience_id)";

/// SQL statement to create an index on the experience active flag.
pub const CREATE_EXPERIENCE_ACTIVE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_experiences_active ON experiences(active)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a room unit.
///
/// Used by both single and batch create operations.
pub const INSERT_ROOM_UNIT: &str = r"
    INSERT INTO room_units (room_type_id, capacity, occupied, status)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to delete a room unit by id.
///
/// Used by both single and batch delete operations.
pub const DELETE_ROOM_UNIT: &str = r"
    DELETE FROM room_units
    WHERE id = ?
";
