//! Paginated listing fetcher
//!
//! This module handles HTTP for the listing stage:
//! - Building the HTTP client shared by the listing and search steps
//! - Walking the listing pages until the first empty page
//! - Progress reporting while entries accumulate

use crate::config::{ClientConfig, ListingConfig};
use crate::pipeline::parser::parse_cards;
use crate::records::ListingEntry;
use crate::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Entry count interval between progress log lines
const PROGRESS_INTERVAL: usize = 110;

/// Builds the HTTP client used by both the listing fetch and the search step
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(FightlinkError)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches every page of the athlete listing and extracts listing entries
///
/// # Termination
///
/// The loop starts at page 1 and increments by 1 until:
/// - a page yields zero qualifying cards (normal end of the listing),
/// - the endpoint returns a non-success status (logged, not retried),
/// - the request itself fails, or
/// - the configured page cap is reached.
///
/// Transport failures terminate the loop but are not errors: the entries
/// accumulated so far are returned. A 404 on page 1 therefore yields an
/// empty entry set, not an `Err`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The listing configuration
///
/// # Returns
///
/// All entries extracted before the loop terminated, in page order
pub async fn fetch_listing(client: &Client, config: &ListingConfig) -> Result<Vec<ListingEntry>> {
    let endpoint = Url::parse(&config.endpoint_base)?;

    let mut entries: Vec<ListingEntry> = Vec::new();
    let mut reported = 0;

    for page in 1..=config.page_cap {
        let page_param = page.to_string();
        let response = match client
            .get(endpoint.clone())
            .query(&[
                ("gender", config.gender.as_str()),
                ("search", ""),
                ("page", page_param.as_str()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Listing request for page {} failed: {}", page, e);
                break;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Listing page {} returned HTTP {}, stopping", page, status);
            break;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read listing page {}: {}", page, e);
                break;
            }
        };

        let page_entries = parse_cards(&body, &endpoint);
        if page_entries.is_empty() {
            tracing::info!("No athlete cards found on page {}, stopping", page);
            break;
        }

        entries.extend(page_entries);

        if entries.len() / PROGRESS_INTERVAL > reported {
            reported = entries.len() / PROGRESS_INTERVAL;
            tracing::info!("Athlete profile links so far: {}", entries.len());
        }

        if page == config.page_cap {
            tracing::warn!("Reached page cap of {}, stopping", config.page_cap);
        }
    }

    tracing::info!("Total athlete profile links found: {}", entries.len());
    Ok(entries)
}
