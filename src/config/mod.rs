//! Configuration module for Fightlink
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files.
//!
//! # Example
//!
//! ```no_run
//! use fightlink::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Listing endpoint: {}", config.listing.endpoint_base);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, ListingConfig, OutputConfig, SearchConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
