//! Record types passed between pipeline stages, plus the JSON intermediate
//! file that connects the scrape invocation to the load invocation.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry extracted from the athlete listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Fighter name as shown on the listing card
    pub name: String,

    /// Absolute URL of the fighter's listing-site profile
    pub primary_url: String,
}

/// Outcome of one search-provider lookup
///
/// A `None` URL is a valid terminal outcome: either the search returned no
/// results or the retry bound was exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub name: String,
    pub secondary_url: Option<String>,
}

/// One merged record: exactly one per [`ListingEntry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub name: String,
    pub primary_url: String,

    /// Null in the JSON file when no secondary profile was resolved
    pub secondary_url: Option<String>,
}

/// Writes the merged record set to a human-readable JSON file
pub fn write_merged(path: &Path, records: &[MergedRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Reads a merged record set back from a JSON file
pub fn read_merged(path: &Path) -> Result<Vec<MergedRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records = serde_json::from_str(&content)?;
    Ok(records)
}
