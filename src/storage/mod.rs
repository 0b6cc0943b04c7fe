//! Storage module for the load stage
//!
//! Provides the SQLite destination table for merged records. The load is a
//! disposable rebuild: every invocation truncates the table and repopulates
//! it from the intermediate file.

mod schema;
mod sqlite;
mod traits;

pub use schema::initialize_schema;
pub use sqlite::SqliteStorage;
pub use traits::{ProfileRow, ProfileStore, StorageError, StorageResult};
