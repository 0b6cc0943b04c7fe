use serde::Deserialize;

/// Main configuration structure for Fightlink
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub listing: ListingConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub client: ClientConfig,
    pub output: OutputConfig,
}

/// Listing scrape configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Base URL of the paginated athlete listing endpoint
    #[serde(rename = "endpoint-base")]
    pub endpoint_base: String,

    /// Value for the listing's gender filter query parameter
    #[serde(default = "default_gender")]
    pub gender: String,

    /// Safety cap on pages fetched; the loop normally ends at the first
    /// empty page, but an endpoint that never returns one would loop forever
    #[serde(rename = "page-cap", default = "default_page_cap")]
    pub page_cap: u32,
}

/// Search provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint accepting a `q` query parameter
    pub endpoint: String,

    /// Suffix appended to each fighter name to form the query
    #[serde(rename = "query-suffix")]
    pub query_suffix: String,

    /// Maximum search attempts per name
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Lower bound of the random throttle interval, in seconds
    #[serde(rename = "throttle-min-secs", default = "default_throttle_min")]
    pub throttle_min_secs: f64,

    /// Upper bound of the random throttle interval, in seconds
    #[serde(rename = "throttle-max-secs", default = "default_throttle_max")]
    pub throttle_max_secs: f64,

    /// Optional cap on the exponential backoff delay; unset means the delay
    /// keeps doubling for every retry
    #[serde(rename = "backoff-cap-secs", default)]
    pub backoff_cap_secs: Option<f64>,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the intermediate merged-records JSON file
    #[serde(rename = "merged-path")]
    pub merged_path: String,

    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_gender() -> String {
    "All".to_string()
}

fn default_page_cap() -> u32 {
    1000
}

fn default_max_retries() -> u32 {
    5
}

fn default_throttle_min() -> f64 {
    1.0
}

fn default_throttle_max() -> f64 {
    5.0
}

fn default_user_agent() -> String {
    // The listing site serves bot user agents a challenge page
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
