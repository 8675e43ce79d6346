//! Navigation tables shared by the desktop bar, the mobile panel, and the
//! footer.
//!
//! The desktop and mobile menus both render [`PRIMARY_NAVIGATION`], so they
//! always list the same entries in the same order.

/// A labelled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavLink {
    pub label: &'static str,
    /// Accessible name when the link renders as a bare icon.
    pub aria_label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            aria_label: label,
            href,
        }
    }

    const fn icon(label: &'static str, aria_label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            aria_label,
            href,
        }
    }
}

/// Category menu.
pub const PRIMARY_NAVIGATION: [NavLink; 8] = [
    NavLink::new("Men", "/products?category=men"),
    NavLink::new("Women", "/products?category=women"),
    NavLink::new("Kids", "/products?category=kids"),
    NavLink::new("Homeware", "/products?category=homeware"),
    NavLink::new("Beauty", "/products?category=beauty"),
    NavLink::new("Brands", "/brands"),
    NavLink::new("Outlet", "/products?filter=outlet"),
    NavLink::new("Sports & Fitness", "/products?category=sports"),
];

/// Account, wishlist, and cart icons next to the search box.
pub const ICON_SHORTCUTS: [NavLink; 3] = [
    NavLink::new("Account", "/account"),
    NavLink::new("Wishlist", "/wishlist"),
    NavLink::icon("Cart (0)", "Shopping Cart", "/cart"),
];

/// A titled column of footer links.
#[derive(Debug, Clone, Copy)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        title: "Shop",
        links: &[
            NavLink::new("New Arrivals", "/products?filter=new"),
            NavLink::new("Brands", "/brands"),
            NavLink::new("Sale", "/products?filter=sale"),
            NavLink::new("Gift Cards", "/gift-cards"),
        ],
    },
    LinkGroup {
        title: "Help",
        links: &[
            NavLink::new("FAQ", "/faq"),
            NavLink::new("Shipping & Returns", "/shipping-returns"),
            NavLink::new("Size Guide", "/size-guide"),
            NavLink::new("Contact Us", "/contact"),
        ],
    },
    LinkGroup {
        title: "Company",
        links: &[
            NavLink::new("About Aline Mart", "/about"),
            NavLink::new("Terms of Service", "/terms"),
            NavLink::new("Privacy Policy", "/privacy"),
            NavLink::new("Careers", "/careers"),
        ],
    },
];

pub const SOCIAL_LINKS: [NavLink; 4] = [
    NavLink::new("Instagram", "https://instagram.com"),
    NavLink::new("Facebook", "https://facebook.com"),
    NavLink::new("Twitter", "https://twitter.com"),
    NavLink::new("YouTube", "https://youtube.com"),
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_primary_navigation_entries() {
        let labels: Vec<&str> = PRIMARY_NAVIGATION.iter().map(|link| link.label).collect();
        assert_eq!(
            labels,
            [
                "Men",
                "Women",
                "Kids",
                "Homeware",
                "Beauty",
                "Brands",
                "Outlet",
                "Sports & Fitness"
            ]
        );
    }

    #[test]
    fn test_destinations_are_unique_and_local() {
        let hrefs: HashSet<&str> = PRIMARY_NAVIGATION.iter().map(|link| link.href).collect();
        assert_eq!(hrefs.len(), PRIMARY_NAVIGATION.len());
        assert!(hrefs.iter().all(|href| href.starts_with('/')));
    }

    #[test]
    fn test_footer_groups() {
        let titles: Vec<&str> = FOOTER_GROUPS.iter().map(|group| group.title).collect();
        assert_eq!(titles, ["Shop", "Help", "Company"]);
        assert!(FOOTER_GROUPS.iter().all(|group| group.links.len() == 4));
    }

    #[test]
    fn test_cart_icon_has_its_own_accessible_name() {
        let cart = ICON_SHORTCUTS
            .iter()
            .find(|link| link.href == "/cart")
            .unwrap();
        assert_eq!(cart.label, "Cart (0)");
        assert_eq!(cart.aria_label, "Shopping Cart");

        let account = ICON_SHORTCUTS.first().unwrap();
        assert_eq!(account.aria_label, account.label);
    }
}
