//! Storage trait and error types

use crate::records::MergedRecord;
use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// One row of the destination table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub id: i64,
    pub name: String,
    pub primary_url: String,
    pub secondary_url: Option<String>,
}

/// Destination table operations
///
/// Errors propagate to the caller; a failure mid-load leaves the table
/// partially populated with no recovery marker, which is acceptable because
/// every load is a full rebuild.
pub trait ProfileStore {
    /// Deletes all existing rows, then inserts the given records.
    ///
    /// The delete and the inserts run in separate committed transactions, so
    /// the consistency checkpoints are: after schema creation, after the
    /// delete, after all inserts.
    fn replace_all(&mut self, records: &[MergedRecord]) -> StorageResult<usize>;

    /// Counts rows currently in the table
    fn count(&self) -> StorageResult<i64>;

    /// Returns all rows ordered by id
    fn all_profiles(&self) -> StorageResult<Vec<ProfileRow>>;
}
