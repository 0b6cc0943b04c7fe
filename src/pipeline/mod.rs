//! Pipeline module for the scrape stage
//!
//! This module contains the collection pipeline, including:
//! - Paginated fetching of the athlete listing
//! - Card extraction from listing markup
//! - Secondary profile resolution via a search provider, with retry
//! - Merging the two record sets by name

mod listing;
mod merger;
mod parser;
mod resolver;

pub use listing::{build_http_client, fetch_listing};
pub use merger::merge;
pub use parser::parse_cards;
pub use resolver::resolve_links;

use crate::config::Config;
use crate::records::MergedRecord;
use crate::Result;

/// Runs the full scrape stage: listing fetch, link resolution, merge
///
/// Returns the merged record set by value; the caller decides where it goes
/// (normally the intermediate JSON file read later by the load stage).
///
/// # Arguments
///
/// * `config` - The pipeline configuration
///
/// # Returns
///
/// * `Ok(Vec<MergedRecord>)` - One record per listing entry, in listing order
/// * `Err(FightlinkError)` - Client construction or endpoint URL failure
pub async fn run_scrape(config: &Config) -> Result<Vec<MergedRecord>> {
    let client = build_http_client(&config.client)?;

    let entries = fetch_listing(&client, &config.listing).await?;

    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    let resolved = resolve_links(&client, &names, &config.search).await;

    let merged = merge(&entries, &resolved);
    tracing::info!(
        "Merged {} records ({} with a secondary profile)",
        merged.len(),
        merged.iter().filter(|r| r.secondary_url.is_some()).count()
    );

    Ok(merged)
}
