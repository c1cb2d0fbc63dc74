//! Web search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};

/// DuckDuckGo Instant Answer API endpoint (no API key required).
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// Raw search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Instant Answer API endpoint
    pub endpoint: String,
    /// Timeout in seconds for a search request
    pub timeout_seconds: u64,
    /// Maximum number of related topics included in the results
    pub max_related_topics: usize,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            timeout_seconds: 30,
            max_related_topics: 10,
        }
    }
}
