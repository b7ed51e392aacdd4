use std::fs;
use std::path::Path;

use http::HeaderValue;

use crate::config::Config;
use crate::error::{FakeMillError, Result};

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let txt = fs::read_to_string(p)
        .map_err(|e| FakeMillError::Config(format!("Failed to read config file: {e}")))?;
    let cfg: Config = toml::from_str(&txt)
        .map_err(|e| FakeMillError::Config(format!("Failed to parse config: {e}")))?;

    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<()> {
    if cfg.app_name.trim().is_empty() {
        return Err(FakeMillError::Config("app_name cannot be empty".into()));
    }

    let rate_limit = &cfg.rate_limit;
    if rate_limit.requests == 0 {
        return Err(FakeMillError::Config("rate_limit.requests must be > 0".into()));
    }
    if rate_limit.window_secs == 0 {
        return Err(FakeMillError::Config("rate_limit.window_secs must be > 0".into()));
    }
    if rate_limit.cleanup_interval_secs == 0 {
        return Err(FakeMillError::Config("rate_limit.cleanup_interval_secs must be > 0".into()));
    }

    let cors = &cfg.cors;
    for (name, value) in [
        ("cors.allow_origins", &cors.allow_origins),
        ("cors.allow_methods", &cors.allow_methods),
        ("cors.allow_headers", &cors.allow_headers),
    ] {
        if HeaderValue::from_str(value).is_err() {
            return Err(FakeMillError::Config(format!("{name} is not a valid header value")));
        }
    }

    if cfg.timeout.keep_alive.enabled && cfg.timeout.keep_alive.timeout_secs == 0 {
        return Err(FakeMillError::Config("timeout.keep_alive.timeout_secs must be > 0".into()));
    }

    Ok(())
}
