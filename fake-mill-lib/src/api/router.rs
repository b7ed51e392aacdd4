use std::net::SocketAddr;
use std::time::Instant;

use http::header::{HeaderValue, ALLOW};
use http::{Method, Request};
use hyper::Response;
use tracing::{error, info, warn};

use crate::security::client_id;

use super::context::AppContext;
use super::handlers::validation::DocumentKind;
use super::handlers::{contact, documents, financial, health, validation};
use super::http_result::HttpError;
use super::query::QueryParams;
use super::rate_limit::check_rate_limit;
use super::response::{error_response, no_content, RespBody};

pub const API_PREFIX: &str = "/api/v1";
pub const HEALTH_PATH: &str = "/api/health";

const VALIDATE_DOCUMENT: [(&str, DocumentKind); 3] = [
    ("/validate/cpf", DocumentKind::Cpf),
    ("/validate/cnpj", DocumentKind::Cnpj),
    ("/validate/rg", DocumentKind::Rg),
];

/// Known endpoints. Document validation routes borrow the raw path remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Health,
    Cpf,
    Cnpj,
    Rg,
    Email,
    Phone,
    BankAccount,
    CreditCard,
    ValidateDocument(DocumentKind, &'a str),
    ValidatePhone,
}

impl<'a> Route<'a> {
    pub fn resolve(path: &'a str) -> Option<Self> {
        if path.trim_end_matches('/') == HEALTH_PATH {
            return Some(Route::Health);
        }

        let rest = path.strip_prefix(API_PREFIX)?;
        for (prefix, kind) in VALIDATE_DOCUMENT {
            if let Some(tail) = rest.strip_prefix(prefix) {
                if tail.is_empty() {
                    return Some(Route::ValidateDocument(kind, ""));
                }
                if let Some(value) = tail.strip_prefix('/') {
                    return Some(Route::ValidateDocument(kind, value));
                }
            }
        }

        match rest.trim_end_matches('/') {
            "/cpf" => Some(Route::Cpf),
            "/cnpj" => Some(Route::Cnpj),
            "/rg" => Some(Route::Rg),
            "/email" => Some(Route::Email),
            "/phone" => Some(Route::Phone),
            "/bank-account" => Some(Route::BankAccount),
            "/credit-card" => Some(Route::CreditCard),
            "/validate/phone" => Some(Route::ValidatePhone),
            _ => None,
        }
    }
}

/// Answer one request and emit its access log line. CORS headers are set on every response.
pub fn handle<B>(req: &Request<B>, peer: Option<SocketAddr>, ctx: &AppContext) -> Response<RespBody> {
    let start = Instant::now();
    let client = client_id(req.headers(), peer);

    let mut resp = dispatch(req, &client, ctx);
    ctx.cors.apply(resp.headers_mut());

    let status = resp.status().as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let method = req.method().as_str();
    let path = req.uri().path();
    match status {
        s if s >= 500 => error!(method, path, status, %client, latency_ms, "request completed"),
        s if s >= 400 => warn!(method, path, status, %client, latency_ms, "request completed"),
        _ => info!(method, path, status, %client, latency_ms, "request completed"),
    }

    resp
}

fn dispatch<B>(req: &Request<B>, client: &str, ctx: &AppContext) -> Response<RespBody> {
    if req.method() == Method::OPTIONS {
        return no_content();
    }

    let path = req.uri().path();
    let route = Route::resolve(path);

    if route != Some(Route::Health) {
        if let Some(limited) = check_rate_limit(ctx.limiter.as_deref(), client, path) {
            return limited;
        }
    }

    let Some(route) = route else {
        return error_response(&HttpError::NotFound(path.to_string()));
    };

    if req.method() != Method::GET {
        let mut resp = error_response(&HttpError::MethodNotAllowed);
        resp.headers_mut().insert(ALLOW, HeaderValue::from_static("GET, OPTIONS"));
        return resp;
    }

    let query = QueryParams::parse(req.uri().query());
    let result = match route {
        Route::Health => health::health(ctx),
        Route::Cpf => documents::cpf(ctx, &query),
        Route::Cnpj => documents::cnpj(ctx, &query),
        Route::Rg => documents::rg(ctx, &query),
        Route::Email => contact::email(ctx, &query),
        Route::Phone => contact::phone(ctx, &query),
        Route::BankAccount => financial::bank_account(ctx, &query),
        Route::CreditCard => financial::credit_card(ctx, &query),
        Route::ValidateDocument(kind, raw) => validation::document(kind, raw),
        Route::ValidatePhone => validation::phone(&query),
    };

    result.unwrap_or_else(|e| {
        if matches!(e, HttpError::Response(_)) {
            error!(error = %e, path, "handler failed");
        }
        error_response(&e)
    })
}
