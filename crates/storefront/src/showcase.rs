//! Landing page content.
//!
//! The hero images, featured products, and marketing copy shown on the home
//! page. Products are real catalog models so prices and discounts go through
//! the same formatting as the rest of the site; the sample values themselves
//! are illustrative.

use aline_mart_core::{
    Brand, Category, ImageId, Price, Product, ProductId, ProductImage,
};
use chrono::{DateTime, TimeZone, Utc};

use crate::components::{Slide, Slideshow, SlideshowError};
use crate::config::HeroConfig;

/// Hero images, in display order.
pub const HERO_IMAGES: [&str; 5] = [
    "/static/images/hero/hero-1.jpg",
    "/static/images/hero/hero-2.jpg",
    "/static/images/hero/hero-3.jpg",
    "/static/images/hero/hero-4.jpg",
    "/static/images/hero/hero-5.jpg",
];

/// Build the landing page slideshow.
///
/// # Errors
///
/// Returns `SlideshowError` if there are no hero images or the configured
/// interval is zero.
pub fn hero_slideshow(config: &HeroConfig) -> Result<Slideshow, SlideshowError> {
    let slides = HERO_IMAGES
        .iter()
        .enumerate()
        .map(|(i, src)| Slide::new(*src, format!("Hero slide {}", i + 1)))
        .collect();
    Slideshow::new(slides, config.rotation_interval)
}

// =============================================================================
// Product Cards
// =============================================================================

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub href: String,
    pub brand: String,
    pub name: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    /// Badge text such as `-30%`.
    pub discount_badge: Option<String>,
    pub is_new: bool,
    pub image_url: Option<String>,
    pub image_alt: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let image = product.primary_image();
        let on_sale = product.is_on_sale();

        Self {
            href: product.href(),
            brand: product.brand.name.clone(),
            name: product.name.clone(),
            price: product.effective_price().display(),
            compare_at_price: on_sale.then(|| product.price.display()),
            discount_badge: product.discount_percent().map(|pct| format!("-{pct}%")),
            is_new: product.is_new,
            image_url: image.map(|img| img.url.clone()),
            image_alt: image
                .and_then(|img| img.alt.clone())
                .unwrap_or_else(|| product.name.clone()),
        }
    }
}

fn catalog_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn brand(slug: &str, name: &str) -> Brand {
    Brand::new(format!("brand_{slug}"), name, slug, catalog_date())
}

/// A showcase product with a single primary image.
fn showcase_product(
    slug: &str,
    name: &str,
    brand: Brand,
    category: Category,
    price: i64,
    sale_price: Option<i64>,
    is_new: bool,
) -> Product {
    let id = ProductId::new(format!("prod_{slug}"));
    Product {
        images: vec![ProductImage {
            id: ImageId::new(format!("img_{slug}")),
            url: format!("/static/images/products/{slug}.jpg"),
            alt: Some(format!("{} {name}", brand.name)),
            order: 0,
            product_id: id.clone(),
        }],
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: String::new(),
        price: Price::usd(price),
        sale_price: sale_price.map(Price::usd),
        brand_id: brand.id.clone(),
        brand,
        category_id: category.id.clone(),
        category,
        variants: Vec::new(),
        featured: true,
        is_new,
        in_stock: true,
        created_at: catalog_date(),
        updated_at: catalog_date(),
    }
}

fn women() -> Category {
    Category::root("cat_women", "Women", "women")
}

fn men() -> Category {
    Category::root("cat_men", "Men", "men")
}

/// Discounted products for the Hot Deals grid.
#[must_use]
pub fn hot_deals() -> Vec<Product> {
    vec![
        showcase_product(
            "gucci-leather-crossbody-bag",
            "Leather Crossbody Bag",
            brand("gucci", "Gucci"),
            women(),
            2140,
            Some(1499),
            false,
        ),
        showcase_product(
            "rolex-oyster-perpetual-watch",
            "Oyster Perpetual Watch",
            brand("rolex", "Rolex"),
            men(),
            7999,
            Some(5999),
            false,
        ),
        showcase_product(
            "prada-saffiano-leather-wallet",
            "Saffiano Leather Wallet",
            brand("prada", "Prada"),
            women(),
            700,
            Some(420),
            false,
        ),
        showcase_product(
            "burberry-classic-trench-coat",
            "Classic Trench Coat",
            brand("burberry", "Burberry"),
            women(),
            1999,
            Some(1299),
            false,
        ),
    ]
}

/// Products for the New Arrivals grid.
#[must_use]
pub fn new_arrivals() -> Vec<Product> {
    vec![
        showcase_product(
            "chanel-classic-flap-shoulder-bag",
            "Classic Flap Shoulder Bag",
            brand("chanel", "Chanel"),
            women(),
            8500,
            None,
            true,
        ),
        showcase_product(
            "louis-vuitton-neverfull-mm-tote",
            "Neverfull MM Tote",
            brand("louis-vuitton", "Louis Vuitton"),
            women(),
            2150,
            None,
            true,
        ),
        showcase_product(
            "cartier-love-bracelet",
            "Love Bracelet",
            brand("cartier", "Cartier"),
            women(),
            7300,
            None,
            true,
        ),
        showcase_product(
            "dior-lady-dior-handbag",
            "Lady Dior Handbag",
            brand("dior", "Dior"),
            women(),
            5500,
            None,
            true,
        ),
    ]
}

// =============================================================================
// Marketing Copy
// =============================================================================

/// An icon-and-text feature tile.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    /// Name of the inline SVG symbol in the icon sprite.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure such as "20+ Brands".
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICES: [Feature; 4] = [
    Feature {
        icon: "shield",
        title: "Authenticated Excellence",
        description: "Every product verified for authenticity and quality",
    },
    Feature {
        icon: "globe",
        title: "Global Delivery",
        description: "Secure shipping to destinations worldwide",
    },
    Feature {
        icon: "concierge",
        title: "Concierge Service",
        description: "Personalized assistance every step of the way",
    },
    Feature {
        icon: "return",
        title: "Effortless Returns",
        description: "30-day return policy for complete peace of mind",
    },
];

pub const CTA_FEATURES: [Feature; 3] = [
    Feature {
        icon: "sparkle",
        title: "Curated Selection",
        description: "Every piece handpicked from the world's most prestigious fashion houses",
    },
    Feature {
        icon: "globe",
        title: "Global Delivery",
        description: "White-glove shipping to your doorstep, anywhere in the world",
    },
    Feature {
        icon: "shield",
        title: "Authenticity Guaranteed",
        description: "Every product verified and authenticated by our expert team",
    },
];

pub const HERO_STATS: [Stat; 2] = [
    Stat {
        value: "20+",
        label: "Brands",
    },
    Stat {
        value: "100+",
        label: "Products",
    },
];

pub const CTA_STATS: [Stat; 2] = [
    Stat {
        value: "20+",
        label: "Luxury Brands",
    },
    Stat {
        value: "100+",
        label: "Premium Products",
    },
];

/// Card networks shown in the footer.
pub const PAYMENT_METHODS: [&str; 4] = ["VISA", "MASTERCARD", "AMEX", "PAYPAL"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_slideshow_has_five_slides() {
        let show = hero_slideshow(&HeroConfig::default()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(show.len(), 5);
        assert_eq!(show.current(), 0);
        assert_eq!(show.interval_ms(), 4000);
    }

    #[test]
    fn test_hot_deal_badges() {
        let badges: Vec<Option<String>> = hot_deals()
            .iter()
            .map(|p| ProductCard::from(p).discount_badge)
            .collect();
        assert_eq!(
            badges,
            ["-30%", "-25%", "-40%", "-35%"].map(|b| Some(b.to_string()))
        );
    }

    #[test]
    fn test_hot_deal_prices() {
        let card = ProductCard::from(&hot_deals()[0]);
        assert_eq!(card.price, "$1,499");
        assert_eq!(card.compare_at_price.as_deref(), Some("$2,140"));
        assert_eq!(card.brand, "Gucci");
    }

    #[test]
    fn test_new_arrivals_are_full_price() {
        for product in new_arrivals() {
            let card = ProductCard::from(&product);
            assert!(card.is_new);
            assert!(card.compare_at_price.is_none());
            assert!(card.discount_badge.is_none());
        }
    }

    #[test]
    fn test_showcase_products_respect_sale_invariant() {
        assert!(
            hot_deals()
                .iter()
                .chain(new_arrivals().iter())
                .all(Product::has_valid_sale_price)
        );
    }
}
