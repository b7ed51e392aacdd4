use chrono::{Days, Months, NaiveDate};
use rand::Rng;
use serde::Serialize;
use tracing::warn;

use crate::documents::rg;
use crate::reference::{find_state, random_state};

pub const ISSUER: &str = "SSP";

const DATE_FORMAT: &str = "%Y-%m-%d";
const MIN_DAYS_SINCE_ISSUE: u64 = 30;
const MAX_DAYS_SINCE_ISSUE: u64 = 3650;
const VALIDITY_MONTHS: u32 = 120;

/// An RG together with its issuing metadata.
///
/// Invalid documents carry no state or dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RgDocument {
    pub rg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub issuer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

/// Build an RG document issued between 30 and 3650 days before `today`, valid for ten years.
///
/// An unknown or empty `state` falls back to a random state.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    state: Option<&str>,
    formatted: bool,
    valid: bool,
) -> RgDocument {
    let number = rg::generate(rng, formatted, valid);
    if !valid {
        return RgDocument {
            rg: number,
            state: None,
            issuer: ISSUER.to_string(),
            issue_date: None,
            expiration_date: None,
        };
    }

    let state = match state.filter(|s| !s.trim().is_empty()) {
        Some(code) => find_state(code).unwrap_or_else(|| {
            warn!(state = code, "unknown state requested, picking a random one");
            random_state(rng)
        }),
        None => random_state(rng),
    };

    let days_ago = rng.gen_range(MIN_DAYS_SINCE_ISSUE..=MAX_DAYS_SINCE_ISSUE);
    let issued = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
    let expires = issued.checked_add_months(Months::new(VALIDITY_MONTHS)).unwrap_or(issued);

    RgDocument {
        rg: number,
        state: Some(state.code.to_string()),
        issuer: ISSUER.to_string(),
        issue_date: Some(issued.format(DATE_FORMAT).to_string()),
        expiration_date: Some(expires.format(DATE_FORMAT).to_string()),
    }
}
