use http::header::{HeaderName, HeaderValue, RETRY_AFTER};
use http::StatusCode;
use hyper::Response;
use serde_json::json;
use tracing::{debug, warn};

use crate::security::{RateLimitResult, RateLimiter};

use super::response::{error_response, json_response, RespBody};

pub const RATE_LIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
pub const RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

const LIMITED_MESSAGE: &str = "You have reached the request limit. Please try again later.";

/// Check rate limiting for incoming request.
///
/// Returns:
/// - `None` if request is allowed to proceed (or limiting is disabled)
/// - `Some(429 response)` if the client exhausted its window
pub fn check_rate_limit(
    limiter: Option<&RateLimiter>,
    client: &str,
    path: &str,
) -> Option<Response<RespBody>> {
    let limiter = limiter?;

    match limiter.check(client) {
        RateLimitResult::Allowed { limit, remaining } => {
            debug!(client, limit, remaining, "rate limit check passed");
            None
        }
        RateLimitResult::Limited { limit, reset_after } => {
            warn!(client, path, limit, "rate limit exceeded");
            let retry_after = reset_after.as_secs_f64().ceil().max(1.0) as u64;
            Some(create_429_response(limit, retry_after))
        }
    }
}

fn create_429_response(limit: usize, retry_after_secs: u64) -> Response<RespBody> {
    let body = json!({ "error": "rate limit exceeded", "message": LIMITED_MESSAGE });
    let mut resp = match json_response(StatusCode::TOO_MANY_REQUESTS, &body) {
        Ok(resp) => resp,
        Err(e) => return error_response(&e),
    };

    let headers = resp.headers_mut();
    headers.insert(RATE_LIMIT_LIMIT, HeaderValue::from(limit));
    headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_static("0"));
    headers.insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
    resp
}
