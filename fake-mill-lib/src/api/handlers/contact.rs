use hyper::Response;
use tracing::{debug, warn};

use crate::api::context::AppContext;
use crate::api::http_result::HttpResult;
use crate::api::query::QueryParams;
use crate::api::response::RespBody;
use crate::generators::PhoneKind;

use super::generate_many;

/// `GET /api/v1/email?domain=&quantity=`
pub fn email(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let domain = query.get("domain");
    debug!(domain, "email generation requested");

    generate_many(query, || ctx.generator.email(domain))
}

/// `GET /api/v1/phone?state=&type=mobile|landline&quantity=`
pub fn phone(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let state = query.get("state");
    let kind = query.get("type").and_then(|raw| {
        let kind = PhoneKind::parse(raw);
        if kind.is_none() && !raw.eq_ignore_ascii_case("random") {
            warn!(value = raw, "unknown phone type, picking a random one");
        }
        kind
    });
    debug!(state, ?kind, "phone generation requested");

    generate_many(query, || ctx.generator.phone(state, kind))
}
