//! Secondary profile resolution via a text search provider
//!
//! For each fighter name the resolver issues one search query and keeps only
//! the top hit. Transient failures are retried with exponential backoff and
//! multiplicative jitter up to a configured bound; after the bound is
//! exhausted the name resolves to no URL rather than failing the run. A
//! random pause separates consecutive names regardless of outcome, to avoid
//! hammering the search provider.
//!
//! Resolution is strictly sequential: one outstanding query at a time.

use crate::config::SearchConfig;
use crate::records::ResolvedLink;
use crate::{FightlinkError, Result};
use rand::Rng;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

/// Anchor class carrying the result link in the provider's HTML results
const RESULT_SELECTOR: &str = "a.result__a";

/// Resolves one [`ResolvedLink`] per input name, in input order
///
/// # Per-name state machine
///
/// Pending -> (Searching -> {Success, Transient-Failure})* -> Done
///
/// - Success with a top hit, or with an empty result page, ends the search
///   for that name (an empty page is not retried).
/// - A transient failure (non-success status, network error) is retried up
///   to `max-retries` attempts; before retry `n` the task sleeps
///   `uniform(throttle-min, throttle-max) * 2^n` seconds, optionally clamped
///   by `backoff-cap-secs`.
/// - After every name, the task sleeps `uniform(throttle-min, throttle-max)`
///   seconds before moving on.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `names` - Fighter names to resolve
/// * `config` - The search provider configuration
///
/// # Returns
///
/// Exactly one entry per input name; `secondary_url` is None when the search
/// returned nothing or retries were exhausted
pub async fn resolve_links(
    client: &Client,
    names: &[String],
    config: &SearchConfig,
) -> Vec<ResolvedLink> {
    let mut resolved = Vec::with_capacity(names.len());

    for name in names {
        let query = format!("{} {}", name, config.query_suffix);
        let secondary_url = search_with_retry(client, &query, name, config).await;

        resolved.push(ResolvedLink {
            name: name.clone(),
            secondary_url,
        });

        // Unconditional pause between queries, success or not
        let pause = jitter(config.throttle_min_secs, config.throttle_max_secs);
        tokio::time::sleep(Duration::from_secs_f64(pause)).await;
    }

    resolved
}

/// Runs the bounded retry loop for a single query
async fn search_with_retry(
    client: &Client,
    query: &str,
    name: &str,
    config: &SearchConfig,
) -> Option<String> {
    let mut attempt = 0;

    loop {
        match search_top_hit(client, &config.endpoint, query).await {
            Ok(hit) => {
                if hit.is_none() {
                    tracing::debug!("No search result for '{}'", name);
                }
                return hit;
            }
            Err(e) => {
                attempt += 1;
                if attempt >= config.max_retries {
                    tracing::warn!(
                        "Giving up on '{}' after {} attempts: {}",
                        name,
                        attempt,
                        e
                    );
                    return None;
                }

                let mut delay = jitter(config.throttle_min_secs, config.throttle_max_secs)
                    * 2f64.powi(attempt as i32);
                if let Some(cap) = config.backoff_cap_secs {
                    delay = delay.min(cap);
                }

                tracing::warn!(
                    "Search for '{}' failed: {}; retrying in {:.2}s (attempt {}/{})",
                    name,
                    e,
                    delay,
                    attempt,
                    config.max_retries
                );
                tokio::time::sleep(Duration::from_secs_f64(delay)).await;
            }
        }
    }
}

/// Issues one search request and returns the top result URL, if any
///
/// A non-success status is an error (retryable); a success response with no
/// qualifying result anchor is `Ok(None)`.
async fn search_top_hit(client: &Client, endpoint: &str, query: &str) -> Result<Option<String>> {
    let response = client.get(endpoint).query(&[("q", query)]).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FightlinkError::SearchStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    Ok(parse_top_result(&body))
}

/// Picks the first result anchor with an http(s) href out of the provider's
/// result markup
pub(crate) fn parse_top_result(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(RESULT_SELECTOR).ok()?;

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .find(|href| href.starts_with("http"))
        .map(|href| href.to_string())
}

/// Draws a random delay from the configured throttle interval
fn jitter(min_secs: f64, max_secs: f64) -> f64 {
    rand::thread_rng().gen_range(min_secs..=max_secs)
}
