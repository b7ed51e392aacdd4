use http::StatusCode;
use hyper::Response;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::http_result::{HttpError, HttpResult};
use crate::api::query::QueryParams;
use crate::api::response::{json_response, RespBody};
use crate::documents::{cnpj, cpf, rg};
use crate::generators::phone::{self, Region};

/// Document kinds validated from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Cpf,
    Cnpj,
    Rg,
}

impl DocumentKind {
    fn param(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
            DocumentKind::Rg => "rg",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CpfValidation<'a> {
    pub cpf: &'a str,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct CnpjValidation<'a> {
    pub cnpj: &'a str,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct RgValidation<'a> {
    pub rg: &'a str,
    pub valid: bool,
}

/// `GET /api/v1/validate/{cpf|cnpj|rg}/{value}`
///
/// `raw` is the still percent-encoded remainder of the path.
pub fn document(kind: DocumentKind, raw: &str) -> HttpResult<Response<RespBody>> {
    let value = percent_decode_str(raw).decode_utf8_lossy();
    let value = value.trim();
    if value.is_empty() {
        warn!(param = kind.param(), "missing required parameter");
        return Err(HttpError::MissingParameter(kind.param()));
    }

    debug!(param = kind.param(), value, "document validation requested");
    match kind {
        DocumentKind::Cpf => {
            json_response(StatusCode::OK, &CpfValidation { cpf: value, valid: cpf::validate(value) })
        }
        DocumentKind::Cnpj => json_response(
            StatusCode::OK,
            &CnpjValidation { cnpj: value, valid: cnpj::validate(value) },
        ),
        DocumentKind::Rg => {
            json_response(StatusCode::OK, &RgValidation { rg: value, valid: rg::validate(value) })
        }
    }
}

/// `GET /api/v1/validate/phone?phone_number=&country_code=&ddi=`
pub fn phone(query: &QueryParams) -> HttpResult<Response<RespBody>> {
    let Some(number) = query.get("phone_number") else {
        warn!(param = "phone_number", "missing required parameter");
        return Err(HttpError::MissingParameter("phone_number"));
    };

    let region = Region { country_code: query.get("country_code"), ddi: query.get("ddi") };
    let result = phone::validate(number, region);
    debug!(phone_number = number, valid = result.valid, "phone validation processed");

    json_response(StatusCode::OK, &result)
}
