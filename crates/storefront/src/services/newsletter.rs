//! Newsletter subscription service.
//!
//! `NewsletterService` is the contract a real email-marketing provider will
//! implement. Until one is wired up, `SimulatedNewsletter` stands in: it waits
//! a fixed delay and always succeeds.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use aline_mart_core::Email;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors a newsletter provider can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    /// The provider refused the address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The address is already on the list.
    #[error("Already subscribed: {0}")]
    AlreadySubscribed(String),

    /// The provider could not be reached or failed.
    #[error("Newsletter service unavailable: {0}")]
    Unavailable(String),
}

/// Subscribes email addresses to the newsletter.
#[async_trait]
pub trait NewsletterService: Send + Sync {
    /// Subscribe `email` to the newsletter list.
    ///
    /// # Errors
    ///
    /// Returns `NewsletterError` if the provider rejects or fails the request.
    async fn subscribe(&self, email: &Email) -> Result<(), NewsletterError>;
}

/// Stand-in provider that sleeps for `delay` and reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedNewsletter {
    delay: Duration,
}

impl SimulatedNewsletter {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedNewsletter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl NewsletterService for SimulatedNewsletter {
    async fn subscribe(&self, email: &Email) -> Result<(), NewsletterError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(domain = %email.domain(), "Simulated newsletter subscription");
        Ok(())
    }
}

/// Registry of newsletter forms with a submission in progress.
///
/// Each rendered form carries a `form_id`; at most one submission per form
/// may be in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlightSubmissions {
    ids: Arc<Mutex<HashSet<Uuid>>>,
}

impl InFlightSubmissions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `form_id`. Returns `None` if that form is already submitting.
    ///
    /// The claim is released when the returned guard drops.
    #[must_use]
    pub fn try_begin(&self, form_id: Uuid) -> Option<InFlightGuard> {
        let inserted = self
            .ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(form_id);
        inserted.then(|| InFlightGuard {
            ids: Arc::clone(&self.ids),
            form_id,
        })
    }

    /// Whether `form_id` currently holds a claim. Read-only, so callers can
    /// check that a finished request released its form.
    #[must_use]
    pub fn is_in_flight(&self, form_id: Uuid) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&form_id)
    }
}

/// Claim on a form's submission slot.
#[derive(Debug)]
pub struct InFlightGuard {
    ids: Arc<Mutex<HashSet<Uuid>>>,
    form_id: Uuid,
}

impl InFlightGuard {
    #[must_use]
    pub const fn form_id(&self) -> Uuid {
        self.form_id
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.form_id);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_waits_then_succeeds() {
        let service = SimulatedNewsletter::default();
        let email = Email::parse("shopper@example.com").unwrap();

        let started = tokio::time::Instant::now();
        service.subscribe(&email).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn test_in_flight_claim_is_exclusive() {
        let registry = InFlightSubmissions::new();
        let form_id = Uuid::new_v4();

        let guard = registry.try_begin(form_id).unwrap();
        assert_eq!(guard.form_id(), form_id);
        assert!(registry.is_in_flight(form_id));
        assert!(registry.try_begin(form_id).is_none());

        // Other forms are independent.
        assert!(registry.try_begin(Uuid::new_v4()).is_some());

        drop(guard);
        assert!(!registry.is_in_flight(form_id));
        assert!(registry.try_begin(form_id).is_some());
    }

    #[test]
    fn test_error_display() {
        let err = NewsletterError::Unavailable("timeout".to_string());
        assert_eq!(err.to_string(), "Newsletter service unavailable: timeout");
    }
}
