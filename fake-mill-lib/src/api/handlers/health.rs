use chrono::Utc;
use http::StatusCode;
use hyper::Response;
use serde::Serialize;

use crate::api::context::AppContext;
use crate::api::http_result::HttpResult;
use crate::api::response::{json_response, RespBody};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
struct Health<'a> {
    status: &'static str,
    version: &'static str,
    name: &'a str,
    timestamp: i64,
    environment: &'a str,
}

/// Health check response - always returns 200 if process is running
pub fn health(ctx: &AppContext) -> HttpResult<Response<RespBody>> {
    let body = Health {
        status: "ok",
        version: VERSION,
        name: &ctx.config.app_name,
        timestamp: Utc::now().timestamp(),
        environment: &ctx.config.environment,
    };
    json_response(StatusCode::OK, &body)
}
