//! Newsletter subscription route handler.
//!
//! The footer form posts here. Script-driven submissions send the
//! `x-storefront-fragment` header and get the re-rendered form back; plain
//! form posts are redirected to the footer.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::components::newsletter::{NewsletterForm, NewsletterFormState, SubmitOutcome};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Request header marking a script-driven submission.
pub const FRAGMENT_HEADER: &str = "x-storefront-fragment";

/// Where plain form posts land afterwards.
pub const NEWSLETTER_ANCHOR: &str = "/#newsletter";

const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
const IN_PROGRESS_MESSAGE: &str =
    "A signup from this form is already in progress. Please wait a moment.";

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
    pub form_id: String,
}

/// The signup form, rendered in the footer and returned as a fragment.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "partials/newsletter_form.html")]
pub struct NewsletterFormTemplate {
    pub form_id: Uuid,
    pub form: NewsletterFormState,
    pub error: Option<String>,
}

impl NewsletterFormTemplate {
    /// An empty, idle form.
    #[must_use]
    pub fn fresh(form_id: Uuid) -> Self {
        Self {
            form_id,
            form: NewsletterFormState::default(),
            error: None,
        }
    }
}

/// Subscribe to the newsletter.
///
/// # Errors
///
/// Returns 400 if the form ID is not a UUID.
#[instrument(skip(state, headers, form), fields(form_id = %form.form_id))]
pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SubscribeForm>,
) -> Result<Response> {
    let form_id = Uuid::parse_str(form.form_id.trim())
        .map_err(|_| AppError::BadRequest("invalid form id".to_string()))?;
    let wants_fragment = headers
        .get(FRAGMENT_HEADER)
        .is_some_and(|value| value.as_bytes() == b"1");

    // The replacement form stays usable; only the first submission is busy.
    let Some(_claim) = state.in_flight().try_begin(form_id) else {
        tracing::debug!("Submission already in flight for this form");
        let retry = NewsletterFormTemplate {
            form_id,
            form: NewsletterFormState {
                email: form.email,
                ..NewsletterFormState::default()
            },
            error: Some(IN_PROGRESS_MESSAGE.to_string()),
        };
        return Ok(respond(wants_fragment, StatusCode::CONFLICT, retry));
    };

    let mut newsletter = NewsletterForm::new(state.newsletter());
    newsletter.set_email(form.email);

    let (status, error) = match newsletter.submit() {
        SubmitOutcome::Started => {
            newsletter.settle().await;
            match newsletter.last_error() {
                None => {
                    add_breadcrumb("newsletter", "Subscribed", None);
                    (StatusCode::OK, None)
                }
                Some(_) => (StatusCode::BAD_GATEWAY, Some(FAILED_MESSAGE.to_string())),
            }
        }
        SubmitOutcome::Rejected(reason) => {
            tracing::debug!(%reason, "Rejected newsletter email");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Some(INVALID_EMAIL_MESSAGE.to_string()),
            )
        }
        // A freshly created form has nothing in flight.
        SubmitOutcome::AlreadyInFlight => (
            StatusCode::CONFLICT,
            Some(IN_PROGRESS_MESSAGE.to_string()),
        ),
    };

    let fragment = NewsletterFormTemplate {
        form_id,
        form: newsletter.snapshot(),
        error,
    };
    Ok(respond(wants_fragment, status, fragment))
}

fn respond(wants_fragment: bool, status: StatusCode, fragment: NewsletterFormTemplate) -> Response {
    if wants_fragment {
        (status, fragment).into_response()
    } else {
        Redirect::to(NEWSLETTER_ANCHOR).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_renders_idle() {
        let html = NewsletterFormTemplate::fresh(Uuid::nil()).render().unwrap();
        assert!(html.contains(r#"name="form_id" value="00000000-0000-0000-0000-000000000000""#));
        assert!(html.contains(">Subscribe<"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_busy_form_renders_disabled() {
        let template = NewsletterFormTemplate {
            form_id: Uuid::nil(),
            form: NewsletterFormState {
                email: "client@example.com".to_string(),
                is_submitting: true,
                last_error: None,
            },
            error: None,
        };
        let html = template.render().unwrap();
        assert!(html.contains("Subscribing..."));
        assert!(html.contains("disabled"));
        assert!(html.contains(r#"value="client@example.com""#));
    }

    #[test]
    fn test_error_is_announced() {
        let template = NewsletterFormTemplate {
            form_id: Uuid::nil(),
            form: NewsletterFormState {
                email: "nope".to_string(),
                ..NewsletterFormState::default()
            },
            error: Some(INVALID_EMAIL_MESSAGE.to_string()),
        };
        let html = template.render().unwrap();
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Please enter a valid email address."));
    }
}
