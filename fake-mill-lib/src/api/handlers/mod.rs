pub mod contact;
pub mod documents;
pub mod financial;
pub mod health;
pub mod validation;

use http::StatusCode;
use hyper::Response;
use serde::Serialize;

use super::http_result::HttpResult;
use super::query::QueryParams;
use super::response::{json_response, RespBody};

/// Run `make` `quantity` times: a single object for one item, an array otherwise.
pub(crate) fn generate_many<T, F>(query: &QueryParams, mut make: F) -> HttpResult<Response<RespBody>>
where
    T: Serialize,
    F: FnMut() -> T,
{
    match query.quantity() {
        1 => json_response(StatusCode::OK, &make()),
        quantity => {
            let items: Vec<T> = (0..quantity).map(|_| make()).collect();
            json_response(StatusCode::OK, &items)
        }
    }
}
