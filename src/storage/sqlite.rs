//! SQLite storage implementation
//!
//! This module provides the SQLite-based implementation of the ProfileStore
//! trait.

use crate::records::MergedRecord;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{ProfileRow, ProfileStore, StorageResult};
use crate::FightlinkError;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// Opens (or creates) the database file and applies the schema; the
    /// schema commit is the first consistency checkpoint of a load.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(FightlinkError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, FightlinkError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, FightlinkError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl ProfileStore for SqliteStorage {
    fn replace_all(&mut self, records: &[MergedRecord]) -> StorageResult<usize> {
        // Clear existing rows; committed before any insert happens
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM fighter_profiles", [])?;
        tx.commit()?;

        // Insert the new record set as one batch
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO fighter_profiles (name, primary_url, secondary_url)
                 VALUES (?1, ?2, ?3)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.name,
                    record.primary_url,
                    record.secondary_url
                ])?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    fn count(&self) -> StorageResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM fighter_profiles", [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    fn all_profiles(&self) -> StorageResult<Vec<ProfileRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, primary_url, secondary_url FROM fighter_profiles ORDER BY id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ProfileRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    primary_url: row.get(2)?,
                    secondary_url: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}
