//! Left join of listing entries against resolved links, keyed by exact name

use crate::records::{ListingEntry, MergedRecord, ResolvedLink};
use std::collections::HashMap;

/// Merges listing entries with resolver output
///
/// Pure function. Builds a name lookup from the resolver output first (last
/// write wins on duplicate names), then walks the listing entries in their
/// original order, producing exactly one record per entry. Entries are never
/// dropped, and resolver names with no listing counterpart never produce a
/// record.
///
/// Name equality is exact string comparison; case or whitespace variants do
/// not join.
pub fn merge(entries: &[ListingEntry], resolved: &[ResolvedLink]) -> Vec<MergedRecord> {
    let lookup: HashMap<&str, &ResolvedLink> = resolved
        .iter()
        .map(|link| (link.name.as_str(), link))
        .collect();

    entries
        .iter()
        .map(|entry| MergedRecord {
            name: entry.name.clone(),
            primary_url: entry.primary_url.clone(),
            secondary_url: lookup
                .get(entry.name.as_str())
                .and_then(|link| link.secondary_url.clone()),
        })
        .collect()
}
