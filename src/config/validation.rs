use crate::config::types::{ClientConfig, Config, ListingConfig, OutputConfig, SearchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_listing_config(&config.listing)?;
    validate_search_config(&config.search)?;
    validate_client_config(&config.client)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates listing scrape configuration
fn validate_listing_config(config: &ListingConfig) -> Result<(), ConfigError> {
    validate_http_url("endpoint-base", &config.endpoint_base)?;

    if config.page_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "page-cap must be >= 1, got {}",
            config.page_cap
        )));
    }

    Ok(())
}

/// Validates search provider configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    validate_http_url("search endpoint", &config.endpoint)?;

    if config.query_suffix.trim().is_empty() {
        return Err(ConfigError::Validation(
            "query-suffix cannot be empty".to_string(),
        ));
    }

    if config.max_retries < 1 || config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be between 1 and 10, got {}",
            config.max_retries
        )));
    }

    if config.throttle_min_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "throttle-min-secs must be >= 0, got {}",
            config.throttle_min_secs
        )));
    }

    if config.throttle_max_secs < config.throttle_min_secs {
        return Err(ConfigError::Validation(format!(
            "throttle-max-secs ({}) must be >= throttle-min-secs ({})",
            config.throttle_max_secs, config.throttle_min_secs
        )));
    }

    if let Some(cap) = config.backoff_cap_secs {
        if cap <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "backoff-cap-secs must be > 0, got {}",
                cap
            )));
        }
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.merged_path.is_empty() {
        return Err(ConfigError::Validation(
            "merged-path cannot be empty".to_string(),
        ));
    }

    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a string is a parseable http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field,
            url.scheme()
        )));
    }

    Ok(())
}
