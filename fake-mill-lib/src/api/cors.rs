use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use http::{HeaderMap, HeaderValue};

use crate::config::CorsConfig;
use crate::error::{FakeMillError, Result};

/// Pre-validated CORS header values attached to every response.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    max_age: HeaderValue,
}

impl CorsHeaders {
    pub fn from_config(cfg: &CorsConfig) -> Result<Self> {
        let value = |name: &str, raw: &str| {
            HeaderValue::from_str(raw)
                .map_err(|e| FakeMillError::Config(format!("invalid cors.{name}: {e}")))
        };

        Ok(Self {
            allow_origin: value("allow_origins", &cfg.allow_origins)?,
            allow_methods: value("allow_methods", &cfg.allow_methods)?,
            allow_headers: value("allow_headers", &cfg.allow_headers)?,
            max_age: HeaderValue::from(cfg.max_age),
        })
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
        headers.insert(ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers() {
        let cors = CorsHeaders::from_config(&CorsConfig::default()).unwrap();
        let mut headers = HeaderMap::new();
        cors.apply(&mut headers);

        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS, POST");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type, Authorization");
        assert_eq!(headers[ACCESS_CONTROL_MAX_AGE], "86400");
    }

    #[test]
    fn rejects_control_characters() {
        let cfg = CorsConfig { allow_origins: "bad\nvalue".into(), ..CorsConfig::default() };
        assert!(CorsHeaders::from_config(&cfg).is_err());
    }
}
