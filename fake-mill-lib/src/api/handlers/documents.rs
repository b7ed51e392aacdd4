use hyper::Response;
use serde::Serialize;
use tracing::debug;

use crate::api::context::AppContext;
use crate::api::http_result::HttpResult;
use crate::api::query::QueryParams;
use crate::api::response::RespBody;

use super::generate_many;

#[derive(Debug, Serialize)]
pub struct CpfResponse {
    pub cpf: String,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct CnpjResponse {
    pub cnpj: String,
    pub valid: bool,
}

/// `GET /api/v1/cpf?formatted=&valid=&quantity=`
pub fn cpf(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let formatted = query.flag("formatted", true);
    let valid = query.flag("valid", true);
    debug!(formatted, valid, "cpf generation requested");

    generate_many(query, || CpfResponse { cpf: ctx.generator.cpf(formatted, valid), valid })
}

/// `GET /api/v1/cnpj?formatted=&valid=&quantity=`
pub fn cnpj(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let formatted = query.flag("formatted", true);
    let valid = query.flag("valid", true);
    debug!(formatted, valid, "cnpj generation requested");

    generate_many(query, || CnpjResponse { cnpj: ctx.generator.cnpj(formatted, valid), valid })
}

/// `GET /api/v1/rg?state=&formatted=&valid=&quantity=`
pub fn rg(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let state = query.get("state");
    let formatted = query.flag("formatted", true);
    let valid = query.flag("valid", true);
    debug!(state, formatted, valid, "rg generation requested");

    generate_many(query, || ctx.generator.rg(state, formatted, valid))
}
