use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// Remote movie API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the movie backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://cinemaguide.skillbox.cc".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Incremental search controller configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiescence window before a lookup fires (default: 500ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Minimum visible loading duration (default: 1000ms)
    #[serde(default = "default_min_loading_ms")]
    pub min_loading_ms: u64,
    /// Maximum results per lookup, forwarded to the backend.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_loading_ms: default_min_loading_ms(),
            limit: None,
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_min_loading_ms() -> u64 {
    1000
}
