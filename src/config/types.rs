use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the query view's single outbound request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// URL fetched on the query view's first mount.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Stable cache key the fetch outcome is stored under.
    #[serde(default = "default_cache_key")]
    pub cache_key: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// UI loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval for the event loop in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_endpoint() -> String {
    "https://api.github.com/repos/tannerlinsley/react-query".to_string()
}

fn default_cache_key() -> String {
    "repo-data".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            cache_key: default_cache_key(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: QueryConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
