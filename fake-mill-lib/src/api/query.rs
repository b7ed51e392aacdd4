use ahash::AHashMap;
use tracing::warn;
use url::form_urlencoded;

pub const MIN_QUANTITY: usize = 1;
pub const MAX_QUANTITY: usize = 200;

/// Decoded query string. The first occurrence of a key wins.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    params: AHashMap<String, String>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let mut params = AHashMap::new();
        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        Self { params }
    }

    /// Value of `key`, or `None` when absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    /// Boolean flag. `default` when absent or blank, `false` when unparsable.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(raw) => parse_bool(raw).unwrap_or_else(|| {
                warn!(param = key, value = raw, "unparsable boolean, treating as false");
                false
            }),
            None => default,
        }
    }

    pub fn quantity(&self) -> usize {
        parse_quantity(self.get("quantity"))
    }
}

/// Accepts `true`/`false`, `t`/`f` and `1`/`0`, ignoring case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// Requested batch size, clamped to 1 when missing or outside `1..=200`.
pub fn parse_quantity(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return MIN_QUANTITY;
    };

    match raw.trim().parse::<usize>() {
        Ok(n) if (MIN_QUANTITY..=MAX_QUANTITY).contains(&n) => n,
        Ok(n) => {
            warn!(
                requested = n,
                min = MIN_QUANTITY,
                max = MAX_QUANTITY,
                "quantity out of range, using default"
            );
            MIN_QUANTITY
        }
        Err(e) => {
            warn!(input = raw, error = %e, "failed to parse quantity, using default");
            MIN_QUANTITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_bounds() {
        assert_eq!(parse_quantity(None), 1);
        assert_eq!(parse_quantity(Some("1")), 1);
        assert_eq!(parse_quantity(Some("200")), 200);
        assert_eq!(parse_quantity(Some("201")), 1);
        assert_eq!(parse_quantity(Some("0")), 1);
        assert_eq!(parse_quantity(Some("-5")), 1);
        assert_eq!(parse_quantity(Some("ten")), 1);
    }

    #[test]
    fn lenient_booleans() {
        for raw in ["true", "TRUE", "t", "1"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["false", "False", "f", "0"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn query_decoding() {
        let q = QueryParams::parse(Some("state=s%50&formatted=0&formatted=1&brand=&quantity=3"));
        assert_eq!(q.get("state"), Some("sP"));
        assert!(!q.flag("formatted", true));
        assert_eq!(q.get("brand"), None);
        assert!(q.flag("valid", true));
        assert_eq!(q.quantity(), 3);
        assert_eq!(QueryParams::parse(None).quantity(), 1);
    }

    #[test]
    fn unparsable_flag_is_false() {
        let q = QueryParams::parse(Some("valid=no&formatted=yes&blank=%20"));
        assert!(!q.flag("valid", true));
        assert!(!q.flag("formatted", true));
        assert!(q.flag("blank", true));
    }
}
