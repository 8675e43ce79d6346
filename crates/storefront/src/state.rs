//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{InFlightSubmissions, NewsletterService, SimulatedNewsletter};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the newsletter service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    newsletter: Arc<dyn NewsletterService>,
    in_flight: InFlightSubmissions,
}

impl AppState {
    /// Create application state with the simulated newsletter service.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let newsletter = SimulatedNewsletter::new(config.newsletter.simulated_delay);
        Self::with_newsletter(config, Arc::new(newsletter))
    }

    /// Create application state with a specific newsletter service.
    #[must_use]
    pub fn with_newsletter(
        config: StorefrontConfig,
        newsletter: Arc<dyn NewsletterService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                newsletter,
                in_flight: InFlightSubmissions::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the newsletter service.
    #[must_use]
    pub fn newsletter(&self) -> Arc<dyn NewsletterService> {
        Arc::clone(&self.inner.newsletter)
    }

    /// Newsletter forms with a submission in progress.
    #[must_use]
    pub fn in_flight(&self) -> &InFlightSubmissions {
        &self.inner.in_flight
    }
}
