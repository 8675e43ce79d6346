//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame and referrer policy, etc.)
//! 5. Rate limiting (governor, newsletter submissions only)

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::newsletter_rate_limiter;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
