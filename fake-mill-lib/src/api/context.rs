use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::generators::Generator;
use crate::security::RateLimiter;

use super::cors::CorsHeaders;

/// Everything a request handler needs, shared across connections.
#[derive(Debug)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub limiter: Option<Arc<RateLimiter>>,
    pub cors: CorsHeaders,
    pub generator: Generator,
}

impl AppContext {
    pub fn new(config: Arc<Config>, limiter: Option<Arc<RateLimiter>>) -> Result<Self> {
        let cors = CorsHeaders::from_config(&config.cors)?;
        Ok(Self { config, limiter, cors, generator: Generator::new() })
    }
}
