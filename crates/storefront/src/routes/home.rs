//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::components::Slideshow;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::layout::Layout;
use crate::showcase::{
    self, CTA_FEATURES, CTA_STATS, Feature, HERO_STATS, ProductCard, SERVICES, Stat,
};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    /// Hero slideshow, rendered on its first slide.
    pub hero: Slideshow,
    pub hero_stats: Vec<Stat>,
    pub hot_deals: Vec<ProductCard>,
    pub new_arrivals: Vec<ProductCard>,
    pub services: Vec<Feature>,
    pub cta_features: Vec<Feature>,
    pub cta_stats: Vec<Stat>,
}

/// Display the home page.
///
/// # Errors
///
/// Returns 500 if the hero slideshow cannot be built.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let hero = showcase::hero_slideshow(&state.config().hero)
        .map_err(|e| AppError::Internal(format!("hero slideshow: {e}")))?;

    Ok(HomeTemplate {
        layout: Layout::new(&state, "/"),
        hero,
        hero_stats: HERO_STATS.to_vec(),
        hot_deals: showcase::hot_deals().iter().map(ProductCard::from).collect(),
        new_arrivals: showcase::new_arrivals()
            .iter()
            .map(ProductCard::from)
            .collect(),
        services: SERVICES.to_vec(),
        cta_features: CTA_FEATURES.to_vec(),
        cta_stats: CTA_STATS.to_vec(),
    })
}
