use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use http_body_util::{combinators::BoxBody, BodyExt, Full};
use hyper::Response;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use super::http_result::{HttpError, HttpResult};

pub type RespBody = BoxBody<Bytes, hyper::Error>;

const APPLICATION_JSON: &str = "application/json";

pub(crate) fn full_body(bytes: impl Into<Bytes>) -> RespBody {
    Full::new(bytes.into()).map_err(|never| match never {}).boxed()
}

pub(crate) fn empty_body() -> RespBody {
    full_body(Bytes::new())
}

/// Serialize `value` as the JSON body of a response with `status`
pub(crate) fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    value: &T,
) -> HttpResult<Response<RespBody>> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| HttpError::Response(format!("Failed to serialize body: {e}")))?;

    let mut resp = Response::new(full_body(bytes));
    *resp.status_mut() = status;
    resp.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    Ok(resp)
}

/// Render an [`HttpError`] as `{"error": ..., "code": ...}`.
///
/// 404 bodies carry the requested path instead of a code.
pub(crate) fn error_response(err: &HttpError) -> Response<RespBody> {
    let status = StatusCode::from(err.clone());
    let body = match err {
        HttpError::NotFound(path) => json!({ "error": err.to_string(), "path": path }),
        _ => json!({ "error": err.to_string(), "code": err.code() }),
    };

    json_response(status, &body).unwrap_or_else(|e| {
        error!(error = %e, "failed to render error response");
        let mut resp = Response::new(full_body(format!("Failed to create error response: {e}")));
        *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        resp
    })
}

pub(crate) fn no_content() -> Response<RespBody> {
    let mut resp = Response::new(empty_body());
    *resp.status_mut() = StatusCode::NO_CONTENT;
    resp
}
