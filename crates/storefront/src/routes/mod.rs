//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! POST /newsletter             - Newsletter signup (fragment or redirect)
//! GET  /health                 - Health check
//! GET  /static/*               - CSS, JS, and images
//! *                            - 404 page
//! ```

pub mod home;
pub mod layout;
pub mod newsletter;

use askama::Template;
use axum::{
    Extension, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::{RequestId, newsletter_rate_limiter};
use crate::state::AppState;
use layout::Layout;

/// Create the newsletter routes router.
pub fn newsletter_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(newsletter::subscribe))
        .layer(newsletter_rate_limiter())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Footer signup form
        .nest("/newsletter", newsletter_routes())
        .fallback(not_found)
}

/// Page shown for unknown paths.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub path: String,
    /// Shown so shoppers can quote it to support.
    pub request_id: String,
}

/// Render the 404 page.
///
/// # Errors
///
/// Returns 500 if the template fails to render.
#[instrument(skip(state, request_id))]
pub async fn not_found(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    uri: Uri,
) -> Result<impl IntoResponse> {
    let page = NotFoundTemplate {
        layout: Layout::new(&state, uri.path()).titled("Page Not Found"),
        path: uri.path().to_string(),
        request_id: request_id.as_str().to_string(),
    };
    Ok((StatusCode::NOT_FOUND, Html(page.render()?)))
}
