//! Database schema management and migrations.
//!
//! This module handles database schema initialization, version checking,
//! and migrations.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_EXPERIENCES_TABLE, CREATE_EXPERIENCE_ACTIVE_INDEX, CREATE_EXPERIENCE_DETAILS_TABLE,
    CREATE_LOCATIONS_TABLE, CREATE_LOCATION_DETAILS_TABLE, CREATE_METADATA_TABLE,
    CREATE_RESERVATIONS_TABLE, CREATE_RESERVATION_EXPERIENCE_INDEX, CREATE_ROOM_TYPES_TABLE,
    CREATE_ROOM_TYPE_EXPERIENCE_INDEX, CREATE_ROOM_UNITS_TABLE, CREATE_UNIT_ROOM_TYPE_INDEX,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. It should only be called on a database that has not been
/// initialized yet.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use posada::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    conn.execute(CREATE_LOCATIONS_TABLE, [])?;
    conn.execute(CREATE_LOCATION_DETAILS_TABLE, [])?;
    conn.execute(CREATE_EXPERIENCES_TABLE, [])?;
    conn.execute(CREATE_EXPERIENCE_DETAILS_TABLE, [])?;
    conn.execute(CREATE_ROOM_TYPES_TABLE, [])?;
    conn.execute(CREATE_ROOM_UNITS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_UNIT_ROOM_TYPE_INDEX, [])?;
    conn.execute(CREATE_ROOM_TYPE_EXPERIENCE_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_EXPERIENCE_INDEX, [])?;
    conn.execute(CREATE_EXPERIENCE_ACTIVE_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" or a missing metadata table.
pub fn get_schema_version(conn: &Connection) -> Result<u32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<u32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // Missing metadata table means an uninitialized database
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// This function:
/// 1. Checks the current schema version
/// 2. If version is 0, initializes the schema
/// 3. If version differs from the current one, returns an error
/// 4. If version matches, returns success
///
/// # Errors
///
/// Returns an error if the schema version is incompatible, the schema
/// cannot be initialized, or a database query fails.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use posada::database::migrations::check_schema_compatibility;
///
/// let conn = Connection::open_in_memory().unwrap();
/// check_schema_compatibility(&conn).unwrap();
/// ```
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}

/// Verifies that an existing database carries the current schema version
/// without initializing anything.
///
/// Used for read-only connections, which cannot create tables.
///
/// # Errors
///
/// Returns an error if the version is missing or differs from the
/// current one, or if a database query fails.
pub fn verify_schema_version(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;
    if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }
    Ok(())
}
