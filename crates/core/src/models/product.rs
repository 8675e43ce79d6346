//! Product, image, and variant models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Brand, Category};
use crate::types::{BrandId, CategoryId, ImageId, Price, ProductId, VariantId, discount_percent};

/// A sellable product.
///
/// `brand` and `category` are denormalized copies of the records referenced
/// by `brand_id` and `category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Price,
    /// Reduced price while on sale. Expected to be at or below `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,
    pub brand_id: BrandId,
    pub brand: Brand,
    pub category_id: CategoryId,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub featured: bool,
    pub is_new: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The price a shopper pays before variant modifiers.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether a sale price is set and actually below the list price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent().is_some()
    }

    /// Whether the sale price (if any) respects `sale_price <= price` in the
    /// same currency.
    #[must_use]
    pub fn has_valid_sale_price(&self) -> bool {
        self.sale_price.is_none_or(|sale| {
            sale.currency_code == self.price.currency_code && sale.amount <= self.price.amount
        })
    }

    /// Whole-percent saving of the sale price over the list price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let sale = self.sale_price?;
        if sale.currency_code != self.price.currency_code {
            return None;
        }
        discount_percent(self.price.amount, sale.amount)
    }

    /// The image with the lowest display order.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.iter().min_by_key(|image| image.order)
    }

    /// Look up a variant by ID.
    #[must_use]
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|variant| &variant.id == id)
    }

    /// Storefront path of the product detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/products/{}", self.slug)
    }
}

/// An image of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ImageId,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Display position; lower comes first.
    pub order: u32,
    pub product_id: ProductId,
}

/// A purchasable variation of a product (color, size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: VariantId,
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub sku: String,
    /// Units on hand.
    pub stock: u32,
    /// Amount added to (or, when negative, taken off) the product price.
    #[serde(default)]
    pub price_modifier: Decimal,
}

impl ProductVariant {
    /// Whether at least one unit is on hand.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Human-readable label such as `Black / M`.
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.color, &self.size) {
            (Some(color), Some(size)) => format!("{color} / {size}"),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => self.sku.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::TimeZone;

    use super::*;

    pub fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default()
    }

    pub fn product(id: &str, price: i64, sale: Option<i64>) -> Product {
        let brand = Brand::new("brand_gucci", "Gucci", "gucci", timestamp());
        let category = Category::root("cat_women", "Women", "women");
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            slug: id.to_string(),
            description: String::new(),
            price: Price::usd(price),
            sale_price: sale.map(Price::usd),
            brand_id: brand.id.clone(),
            brand,
            category_id: category.id.clone(),
            category,
            images: Vec::new(),
            variants: Vec::new(),
            featured: false,
            is_new: false,
            in_stock: true,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    pub fn variant(id: &str, product_id: &str, modifier: i64) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            product_id: ProductId::new(product_id),
            color: Some("Black".to_string()),
            size: None,
            sku: format!("SKU-{id}"),
            stock: 3,
            price_modifier: Decimal::from(modifier),
        }
    }
}
