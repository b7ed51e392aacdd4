use serde::Deserialize;
use std::net::SocketAddr;

use super::security::{CorsConfig, RateLimitConfig};
use super::telemetry::LoggingConfig;
use super::timeout::TimeoutConfig;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Address and port to listen on
    /// Example: "0.0.0.0:8080" or "127.0.0.1:3000"
    /// Default: "0.0.0.0:8080"
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Application name reported by the health endpoint
    /// Default: "Fake Mill API"
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Deployment environment reported by the health endpoint
    /// Default: "production"
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Per-client rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// CORS response headers
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Timeout configuration
    #[serde(default)]
    pub timeout: TimeoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            app_name: default_app_name(),
            environment: default_environment(),
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            timeout: TimeoutConfig::default(),
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_app_name() -> String {
    "Fake Mill API".to_string()
}

fn default_environment() -> String {
    "production".to_string()
}
