//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Newsletter submissions are the only write endpoint, so they are the only
//! route behind a limiter.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// Client IP headers in order of preference.
///
/// `x-forwarded-for` may hold a chain; its first entry is the client.
const CLIENT_IP_HEADERS: [&str; 3] = ["cf-connecting-ip", "x-forwarded-for", "x-real-ip"];

/// Key extractor that reads the client IP from proxy headers, preferring
/// Cloudflare's `CF-Connecting-IP`, and falls back to the peer address when
/// the server is reached directly.
///
/// The fallback needs the router served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
#[derive(Clone, Copy)]
pub struct CloudflareIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for CloudflareIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        CLIENT_IP_HEADERS
            .iter()
            .find_map(|name| {
                headers
                    .get(*name)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.split(',').next())
                    .and_then(|s| s.trim().parse::<IpAddr>().ok())
            })
            .or_else(|| {
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<CloudflareIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for newsletter submissions: ~30 requests per minute
/// per IP.
///
/// Configuration: 1 request every 2 seconds (replenish), burst of 5.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(2)` and `burst_size(5)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn newsletter_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(CloudflareIpKeyExtractor)
        .per_second(2)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(2) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_governor::key_extractor::KeyExtractor;

    use super::*;

    fn request(headers: &[(&str, &str)]) -> Request<()> {
        let mut builder = Request::builder().uri("/newsletter");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_prefers_cloudflare_header() {
        let req = request(&[
            ("x-forwarded-for", "10.0.0.1"),
            ("cf-connecting-ip", "203.0.113.7"),
        ]);
        let ip = CloudflareIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "203.0.113.7");
    }

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let req = request(&[("x-forwarded-for", "198.51.100.2, 10.0.0.1")]);
        let ip = CloudflareIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "198.51.100.2");
    }

    #[test]
    fn test_falls_back_to_peer_address() {
        let mut req = request(&[]);
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 44], 51234))));
        let ip = CloudflareIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "192.0.2.44");
    }

    #[test]
    fn test_headers_win_over_peer_address() {
        let mut req = request(&[("x-real-ip", "198.51.100.9")]);
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 51234))));
        let ip = CloudflareIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "198.51.100.9");
    }

    #[test]
    fn test_no_headers_and_no_peer_is_an_error() {
        let req = request(&[("x-real-ip", "not an ip")]);
        assert!(CloudflareIpKeyExtractor.extract(&req).is_err());
    }
}
