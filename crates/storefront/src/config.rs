//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for canonical links (default: <http://localhost:3000>)
//! - `STOREFRONT_STATIC_DIR` - Directory served under `/static` (default: crates/storefront/static)
//! - `HERO_ROTATION_INTERVAL_MS` - Hero slideshow interval (default: 4000)
//! - `NEWSLETTER_SIMULATED_DELAY_MS` - Simulated newsletter round trip (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// Directory holding CSS, JS, and images
    pub static_dir: PathBuf,
    /// Hero slideshow behaviour
    pub hero: HeroConfig,
    /// Newsletter form behaviour
    pub newsletter: NewsletterConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Hero slideshow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroConfig {
    /// Time between automatic slide advances.
    pub rotation_interval: Duration,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            rotation_interval: Duration::from_millis(4000),
        }
    }
}

/// Newsletter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterConfig {
    /// Delay of the simulated subscription call.
    pub simulated_delay: Duration,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            simulated_delay: Duration::from_millis(1000),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or_default(&lookup, "STOREFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or_default(&lookup, "STOREFRONT_PORT", 3000_u16)?;
        let base_url = lookup("STOREFRONT_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;
        let static_dir = lookup("STOREFRONT_STATIC_DIR")
            .map_or_else(|| PathBuf::from("crates/storefront/static"), PathBuf::from);

        let rotation_ms = parse_or_default(&lookup, "HERO_ROTATION_INTERVAL_MS", 4000_u64)?;
        if rotation_ms == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "HERO_ROTATION_INTERVAL_MS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        let delay_ms = parse_or_default(&lookup, "NEWSLETTER_SIMULATED_DELAY_MS", 1000_u64)?;

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            hero: HeroConfig {
                rotation_interval: Duration::from_millis(rotation_ms),
            },
            newsletter: NewsletterConfig {
                simulated_delay: Duration::from_millis(delay_ms),
            },
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_or_default(&lookup, "SENTRY_SAMPLE_RATE", 1.0_f32)?,
            sentry_traces_sample_rate: parse_or_default(
                &lookup,
                "SENTRY_TRACES_SAMPLE_RATE",
                0.0_f32,
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: Url::parse("http://localhost:3000").unwrap_or_else(|_| unreachable!()),
            static_dir: PathBuf::from("crates/storefront/static"),
            hero: HeroConfig::default(),
            newsletter: NewsletterConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if present, otherwise use `default`.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
