//! Fightlink: a two-stage fighter profile pipeline
//!
//! This crate scrapes a paginated athlete listing for profile links, resolves
//! a secondary profile URL per fighter through a text search provider, merges
//! the two record sets by name, and loads the merged records into SQLite.

pub mod config;
pub mod pipeline;
pub mod records;
pub mod storage;

use thiserror::Error;

/// Main error type for Fightlink operations
#[derive(Debug, Error)]
pub enum FightlinkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Search provider returned HTTP {status}")]
    SearchStatus { status: u16 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Fightlink operations
pub type Result<T> = std::result::Result<T, FightlinkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use records::{ListingEntry, MergedRecord, ResolvedLink};
