//! Database schema definition
//!
//! This module contains the SQL schema for the Fightlink destination table.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Merged fighter profile records, rebuilt in full on every load
CREATE TABLE IF NOT EXISTS fighter_profiles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    primary_url TEXT NOT NULL,
    secondary_url TEXT
);

CREATE INDEX IF NOT EXISTS idx_fighter_profiles_name ON fighter_profiles(name);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_initializes() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(initialize_schema(&conn).is_ok());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Initialize twice
        initialize_schema(&conn).unwrap();
        assert!(initialize_schema(&conn).is_ok());
    }

    #[test]
    fn test_table_exists_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='fighter_profiles'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_secondary_url_is_nullable() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO fighter_profiles (name, primary_url, secondary_url) VALUES ('A', 'u1', NULL)",
            [],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_name_is_not_nullable() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO fighter_profiles (name, primary_url) VALUES (NULL, 'u1')",
            [],
        );
        assert!(result.is_err());
    }
}
