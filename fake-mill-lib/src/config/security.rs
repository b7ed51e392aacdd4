use serde::Deserialize;
use std::time::Duration;

/// Rate limiting configuration
///
/// Every client (identified by IP) may perform at most `requests` requests
/// inside any trailing window of `window_secs` seconds.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    /// Default: true
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum admitted requests per client inside one window
    /// Default: 60
    #[serde(default = "default_requests")]
    pub requests: usize,
    /// Length of the sliding window in seconds
    /// Default: 60
    #[serde(default = "default_window_seconds")]
    pub window_secs: u64,
    /// How often stale client windows are evicted, in seconds
    /// Default: 300 (5 minutes)
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests: default_requests(),
            window_secs: default_window_seconds(),
            cleanup_interval_secs: default_cleanup_interval(),
        }
    }
}

/// CORS configuration
///
/// Values are copied verbatim into the `Access-Control-*` response headers.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CorsConfig {
    /// Default: "*"
    #[serde(default = "default_allow_origins")]
    pub allow_origins: String,
    /// Default: "GET, OPTIONS, POST"
    #[serde(default = "default_allow_methods")]
    pub allow_methods: String,
    /// Default: "Content-Type, Authorization"
    #[serde(default = "default_allow_headers")]
    pub allow_headers: String,
    /// Preflight cache lifetime in seconds
    /// Default: 86400 (1 day)
    #[serde(default = "default_max_age")]
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: default_allow_origins(),
            allow_methods: default_allow_methods(),
            allow_headers: default_allow_headers(),
            max_age: default_max_age(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_requests() -> usize {
    60
}

fn default_window_seconds() -> u64 {
    60
}

fn default_cleanup_interval() -> u64 {
    300
}

fn default_allow_origins() -> String {
    "*".to_string()
}

fn default_allow_methods() -> String {
    "GET, OPTIONS, POST".to_string()
}

fn default_allow_headers() -> String {
    "Content-Type, Authorization".to_string()
}

fn default_max_age() -> u64 {
    86400
}
