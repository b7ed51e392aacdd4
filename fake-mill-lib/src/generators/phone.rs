//! Brazilian telephone numbers: generation, and validation through the
//! libphonenumber metadata shipped with the `phonenumber` crate.

use std::fmt;

use phonenumber::metadata::DATABASE;
use phonenumber::{country, Mode, Type};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::reference::{find_state, random_state};

const DEFAULT_REGION: &str = "BR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Mobile,
    Landline,
}

impl PhoneKind {
    /// Parse `mobile` or `landline`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mobile" => Some(Self::Mobile),
            "landline" => Some(Self::Landline),
            _ => None,
        }
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mobile => "mobile",
            Self::Landline => "landline",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phone {
    pub phone: String,
    pub formatted: String,
    pub unformatted: String,
    #[serde(rename = "type")]
    pub kind: PhoneKind,
    pub ddd: String,
    pub state: String,
}

/// Generate a phone number for `state` (random when unknown) of the given kind (random when `None`).
pub fn generate<R: Rng + ?Sized>(rng: &mut R, state: Option<&str>, kind: Option<PhoneKind>) -> Phone {
    let state = state.and_then(find_state).unwrap_or_else(|| random_state(rng));
    let ddd = state.random_area_code(rng);
    let kind = kind.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    });

    let subscriber = match kind {
        PhoneKind::Mobile => format!("9{:04}-{:04}", rng.gen_range(0..10_000), rng.gen_range(0..10_000)),
        PhoneKind::Landline => format!(
            "{}{:03}-{:04}",
            rng.gen_range(3..=7),
            rng.gen_range(0..1_000),
            rng.gen_range(0..10_000)
        ),
    };

    let phone = format!("({ddd}) {subscriber}");
    Phone {
        unformatted: unformat(&phone),
        formatted: phone.clone(),
        phone,
        kind,
        ddd: ddd.to_string(),
        state: state.code.to_string(),
    }
}

/// Remove parentheses, spaces and dashes.
pub fn unformat(phone: &str) -> String {
    phone.chars().filter(|c| !matches!(c, '(' | ')' | ' ' | '-')).collect()
}

/// Render `DDXXXXXXXX` / `DDXXXXXXXXX` as `(DD) XXXX-XXXX` / `(DD) XXXXX-XXXX`.
///
/// Anything else is returned unchanged.
pub fn format(phone: &str) -> String {
    let clean = unformat(phone);
    if !clean.is_ascii() {
        return phone.to_string();
    }
    match clean.len() {
        10 => format!("({}) {}-{}", &clean[..2], &clean[2..6], &clean[6..]),
        11 => format!("({}) {}-{}", &clean[..2], &clean[2..7], &clean[7..]),
        _ => phone.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl From<Type> for NumberType {
    fn from(value: Type) -> Self {
        match value {
            Type::FixedLine => Self::FixedLine,
            Type::Mobile => Self::Mobile,
            Type::FixedLineOrMobile => Self::FixedLineOrMobile,
            Type::TollFree => Self::TollFree,
            Type::PremiumRate => Self::PremiumRate,
            Type::SharedCost => Self::SharedCost,
            Type::Voip => Self::Voip,
            Type::PersonalNumber => Self::PersonalNumber,
            Type::Pager => Self::Pager,
            Type::Uan => Self::Uan,
            Type::Voicemail => Self::Voicemail,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneValidation {
    pub valid: bool,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddi: Option<u16>,
    pub number_type: NumberType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e164_format: Option<String>,
}

impl PhoneValidation {
    fn unparsed(input: &str) -> Self {
        Self {
            valid: false,
            phone_number: input.to_string(),
            country_code: None,
            ddi: None,
            number_type: NumberType::Unknown,
            national_format: None,
            international_format: None,
            e164_format: None,
        }
    }
}

/// Region hint supplied alongside a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region<'a> {
    pub country_code: Option<&'a str>,
    pub ddi: Option<&'a str>,
}

impl Region<'_> {
    /// ISO region used to parse national numbers.
    ///
    /// `country_code` wins over `ddi`; an unparsable `ddi` falls back to `BR`.
    /// `None` when the hint names no known region.
    fn resolve(&self) -> Option<country::Id> {
        if let Some(code) = self.country_code {
            return code.to_ascii_uppercase().parse().ok();
        }
        let Some(ddi) = self.ddi else {
            return DEFAULT_REGION.parse().ok();
        };
        match ddi.trim_start_matches('+').parse::<u16>() {
            Ok(code) => DATABASE
                .region(&code)
                .and_then(|ids| ids.first().and_then(|id| id.parse().ok())),
            Err(e) => {
                warn!(ddi, error = %e, "invalid ddi format, using default region");
                DEFAULT_REGION.parse().ok()
            }
        }
    }
}

/// Validate `input` against the libphonenumber metadata for the hinted region.
///
/// Numbers written with a leading `+` carry their own country code and parse
/// regardless of the hint.
pub fn validate(input: &str, region: Region<'_>) -> PhoneValidation {
    let number = match phonenumber::parse(region.resolve(), input) {
        Ok(number) => number,
        Err(e) => {
            debug!(phone_number = input, error = %e, "failed to parse phone number");
            return PhoneValidation::unparsed(input);
        }
    };

    let valid = phonenumber::is_valid(&number);
    let mut result = PhoneValidation {
        valid,
        phone_number: input.to_string(),
        country_code: number.metadata(&DATABASE).map(|m| m.id().to_string()),
        ddi: Some(number.code().value()),
        number_type: NumberType::Unknown,
        national_format: None,
        international_format: None,
        e164_format: None,
    };

    if valid {
        result.number_type = number.number_type(&DATABASE).into();
        result.national_format = Some(number.format().mode(Mode::National).to_string());
        result.international_format = Some(number.format().mode(Mode::International).to_string());
        result.e164_format = Some(number.format().mode(Mode::E164).to_string());
    }
    result
}
