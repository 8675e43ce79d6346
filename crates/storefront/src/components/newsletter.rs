//! Newsletter signup form.
//!
//! Submitting a valid address marks the form busy right away and runs the
//! subscription in the background. When it completes the form goes idle and
//! the address is cleared. A failed subscription keeps the address and
//! records the error; nothing retries automatically.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aline_mart_core::{Email, EmailError};

use super::lifecycle::Subscription;
use crate::services::NewsletterService;

/// Submit button label while idle.
pub const SUBSCRIBE_LABEL: &str = "Subscribe";

/// Submit button label while a submission is in flight.
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";

/// What happened when the form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The subscription is running.
    Started,
    /// A previous submission has not finished; nothing was done.
    AlreadyInFlight,
    /// The address is not valid; nothing was done.
    Rejected(EmailError),
}

/// Point-in-time view of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterFormState {
    pub email: String,
    pub is_submitting: bool,
    pub last_error: Option<String>,
}

impl NewsletterFormState {
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBSCRIBING_LABEL
        } else {
            SUBSCRIBE_LABEL
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    form: NewsletterFormState,
    detached: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The newsletter form.
pub struct NewsletterForm {
    shared: Arc<Mutex<Shared>>,
    service: Arc<dyn NewsletterService>,
    pending: Option<Subscription>,
}

impl std::fmt::Debug for NewsletterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterForm")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl NewsletterForm {
    #[must_use]
    pub fn new(service: Arc<dyn NewsletterService>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            service,
            pending: None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> NewsletterFormState {
        lock(&self.shared).form.clone()
    }

    #[must_use]
    pub fn email(&self) -> String {
        lock(&self.shared).form.email.clone()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        lock(&self.shared).form.is_submitting
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        lock(&self.shared).form.last_error.clone()
    }

    /// Update the input's contents.
    pub fn set_email(&self, email: impl Into<String>) {
        lock(&self.shared).form.email = email.into();
    }

    /// Submit the current address.
    pub fn submit(&mut self) -> SubmitOutcome {
        let email = {
            let mut shared = lock(&self.shared);
            if shared.form.is_submitting {
                return SubmitOutcome::AlreadyInFlight;
            }
            let email = match Email::parse(&shared.form.email) {
                Ok(email) => email,
                Err(e) => return SubmitOutcome::Rejected(e),
            };
            shared.form.is_submitting = true;
            shared.form.last_error = None;
            email
        };

        let shared = Arc::clone(&self.shared);
        let service = Arc::clone(&self.service);
        self.pending = Some(Subscription::spawn(async move {
            let result = service.subscribe(&email).await;
            let mut shared = lock(&shared);
            if shared.detached {
                return;
            }
            shared.form.is_submitting = false;
            match result {
                Ok(()) => shared.form.email.clear(),
                Err(e) => {
                    tracing::warn!(error = %e, "Newsletter subscription failed");
                    shared.form.last_error = Some(e.to_string());
                }
            }
        }));

        SubmitOutcome::Started
    }

    /// Wait for the in-flight submission, if any, to complete.
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.join().await;
        }
    }
}

impl Drop for NewsletterForm {
    fn drop(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
        }
        lock(&self.shared).detached = true;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::services::{NewsletterError, SimulatedNewsletter};

    struct FailingNewsletter;

    #[async_trait]
    impl NewsletterService for FailingNewsletter {
        async fn subscribe(&self, _email: &Email) -> Result<(), NewsletterError> {
            Err(NewsletterError::Unavailable("provider down".to_string()))
        }
    }

    fn simulated_form() -> NewsletterForm {
        NewsletterForm::new(Arc::new(SimulatedNewsletter::new(Duration::from_millis(
            1000,
        ))))
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_busy_then_reset() {
        let mut form = simulated_form();
        form.set_email("client@example.com");

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert!(form.is_submitting());
        assert_eq!(form.snapshot().submit_label(), SUBSCRIBING_LABEL);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(form.is_submitting());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!form.is_submitting());
        assert_eq!(form.email(), "");
        assert_eq!(form.snapshot().submit_label(), SUBSCRIBE_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_busy_is_noop() {
        let mut form = simulated_form();
        form.set_email("client@example.com");
        assert_eq!(form.submit(), SubmitOutcome::Started);

        form.set_email("other@example.com");
        assert_eq!(form.submit(), SubmitOutcome::AlreadyInFlight);

        form.settle().await;
        assert!(!form.is_submitting());
        assert_eq!(form.email(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_email_rejected_without_state_change() {
        let mut form = simulated_form();
        form.set_email("not-an-email");

        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(EmailError::MissingAtSymbol)
        );
        assert!(!form.is_submitting());
        assert_eq!(form.email(), "not-an-email");
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_error_keeps_email() {
        let mut form = NewsletterForm::new(Arc::new(FailingNewsletter));
        form.set_email("client@example.com");
        assert_eq!(form.submit(), SubmitOutcome::Started);

        form.settle().await;
        assert!(!form.is_submitting());
        assert_eq!(form.email(), "client@example.com");
        assert_eq!(
            form.last_error().as_deref(),
            Some("Newsletter service unavailable: provider down")
        );

        // Resubmitting clears the previous error.
        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert!(form.last_error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_completion() {
        let mut form = simulated_form();
        form.set_email("client@example.com");
        form.submit();
        let shared = Arc::clone(&form.shared);

        drop(form);
        tokio::time::sleep(Duration::from_millis(2000)).await;

        let shared = lock(&shared);
        assert!(shared.detached);
        assert_eq!(shared.form.email, "client@example.com");
    }
}
