use hyper::Response;
use tracing::debug;

use crate::api::context::AppContext;
use crate::api::http_result::HttpResult;
use crate::api::query::QueryParams;
use crate::api::response::RespBody;

use super::generate_many;

/// `GET /api/v1/bank-account?bank=&quantity=`
pub fn bank_account(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let bank = query.get("bank");
    debug!(bank, "bank account generation requested");

    generate_many(query, || ctx.generator.bank_account(bank))
}

/// `GET /api/v1/credit-card?brand=&quantity=`
pub fn credit_card(ctx: &AppContext, query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let brand = query.get("brand");
    debug!(brand, "credit card generation requested");

    generate_many(query, || ctx.generator.credit_card(brand))
}
