//! Data shared by every full page: header, navigation, and footer.

use uuid::Uuid;

use crate::components::HeaderState;
use crate::navigation::{
    FOOTER_GROUPS, ICON_SHORTCUTS, LinkGroup, NavLink, PRIMARY_NAVIGATION, SOCIAL_LINKS,
};
use crate::routes::newsletter::NewsletterFormTemplate;
use crate::showcase::PAYMENT_METHODS;
use crate::state::AppState;

pub const SITE_TITLE: &str = "Aline Mart - Luxury Multi-Brand Marketplace";

pub const SITE_DESCRIPTION: &str = "Discover luxury fashion from the world's most prestigious \
     brands. Curated collections for the discerning shopper.";

/// Chrome around page content.
#[derive(Debug, Clone)]
pub struct Layout {
    pub title: String,
    pub description: &'static str,
    pub canonical_url: String,
    /// Initial header state; the page script takes over after load.
    pub header: HeaderState,
    pub navigation: Vec<NavLink>,
    pub shortcuts: Vec<NavLink>,
    pub footer_groups: Vec<LinkGroup>,
    pub social_links: Vec<NavLink>,
    pub payment_methods: Vec<&'static str>,
    /// Footer signup form, with a fresh form ID per page view.
    pub newsletter: NewsletterFormTemplate,
}

impl Layout {
    /// Layout for the page at `path`.
    #[must_use]
    pub fn new(state: &AppState, path: &str) -> Self {
        let canonical_url = state
            .config()
            .base_url
            .join(path)
            .map_or_else(|_| state.config().base_url.to_string(), String::from);

        Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION,
            canonical_url,
            header: HeaderState::new(),
            navigation: PRIMARY_NAVIGATION.to_vec(),
            shortcuts: ICON_SHORTCUTS.to_vec(),
            footer_groups: FOOTER_GROUPS.to_vec(),
            social_links: SOCIAL_LINKS.to_vec(),
            payment_methods: PAYMENT_METHODS.to_vec(),
            newsletter: NewsletterFormTemplate::fresh(Uuid::new_v4()),
        }
    }

    /// Prefix the site title with a page name.
    #[must_use]
    pub fn titled(mut self, page: &str) -> Self {
        self.title = format!("{page} | Aline Mart");
        self
    }
}
