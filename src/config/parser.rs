use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a given scrape or load can be correlated with the
/// configuration that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_CONFIG: &str = r#"
[listing]
endpoint-base = "https://listing.example/athletes/all"

[search]
endpoint = "https://search.example/html/"
query-suffix = "Sherdog"

[output]
merged-path = "./merged_data.json"
database-path = "./fightlink.db"
"#;

    #[test]
    fn test_load_valid_config_with_defaults() {
        let file = create_temp_config(VALID_CONFIG);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.listing.endpoint_base, "https://listing.example/athletes/all");
        assert_eq!(config.listing.gender, "All");
        assert_eq!(config.listing.page_cap, 1000);
        assert_eq!(config.search.max_retries, 5);
        assert_eq!(config.search.throttle_min_secs, 1.0);
        assert_eq!(config.search.throttle_max_secs, 5.0);
        assert_eq!(config.search.backoff_cap_secs, None);
        assert_eq!(config.client.timeout_secs, 30);
    }

    #[test]
    fn test_load_config_with_explicit_values() {
        let config_content = r#"
[listing]
endpoint-base = "https://listing.example/athletes/all"
gender = "Female"
page-cap = 50

[search]
endpoint = "https://search.example/html/"
query-suffix = "Sherdog"
max-retries = 3
throttle-min-secs = 0.5
throttle-max-secs = 2.0
backoff-cap-secs = 120.0

[client]
user-agent = "TestAgent/1.0"
timeout-secs = 10

[output]
merged-path = "./out.json"
database-path = "./out.db"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.listing.gender, "Female");
        assert_eq!(config.listing.page_cap, 50);
        assert_eq!(config.search.max_retries, 3);
        assert_eq!(config.search.backoff_cap_secs, Some(120.0));
        assert_eq!(config.client.user_agent, "TestAgent/1.0");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[listing]
endpoint-base = "https://listing.example/athletes/all"

[search]
endpoint = "https://search.example/html/"
query-suffix = "Sherdog"
max-retries = 0

[output]
merged-path = "./merged_data.json"
database-path = "./fightlink.db"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        // Same content should produce same hash
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // SHA-256 produces 64 hex characters
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
