mod loader;
mod root;
mod security;
mod telemetry;
mod timeout;

pub use loader::{load_from_path, validate_config};
pub use root::Config;
pub use security::{CorsConfig, RateLimitConfig};
pub use telemetry::LoggingConfig;
pub use timeout::{KeepAliveConfig, TimeoutConfig};
