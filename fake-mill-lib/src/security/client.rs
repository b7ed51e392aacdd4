use std::net::SocketAddr;

use http::HeaderMap;

/// Identifier used when nothing about the caller is known.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Extract the rate limiting key for a request.
///
/// Precedence:
/// 1. first entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. the peer socket IP
/// 4. [`UNKNOWN_CLIENT`]
pub fn client_id(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(first_ip) = headers
        .get("x-forwarded-for")
        .and_then(|xff| xff.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return first_ip.to_string();
    }

    if let Some(real_ip) = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return real_ip.to_string();
    }

    peer.map(|p| p.ip().to_string()).unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        "192.0.2.10:54321".parse().ok()
    }

    #[test]
    fn forwarded_for_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(" 203.0.113.1 , 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_id(&headers, peer()), "203.0.113.1");
    }

    #[test]
    fn real_ip_used_without_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_id(&headers, peer()), "198.51.100.2");
    }

    #[test]
    fn falls_back_to_peer_then_unknown() {
        let headers = HeaderMap::new();
        assert_eq!(client_id(&headers, peer()), "192.0.2.10");
        assert_eq!(client_id(&headers, None), UNKNOWN_CLIENT);
    }

    #[test]
    fn empty_forwarded_for_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        assert_eq!(client_id(&headers, peer()), "192.0.2.10");
    }
}
