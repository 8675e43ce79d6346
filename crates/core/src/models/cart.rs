//! Shopping cart contract and an in-memory implementation.
//!
//! `CartState` is the contract a cart store exposes to the UI. `MemoryCart`
//! keeps lines in a `Vec` and is what the storefront uses until a real cart
//! backend exists. Totals are plain sums: no tax, shipping, or currency
//! conversion.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductVariant};
use crate::types::{ProductId, VariantId};

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    pub quantity: u32,
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProductVariant>,
}

impl CartItem {
    /// Price of one unit: the product's effective price plus the variant
    /// modifier, if any.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        let modifier = self
            .variant
            .as_ref()
            .map_or(Decimal::ZERO, |variant| variant.price_modifier);
        self.product.effective_price().amount + modifier
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }

    fn matches(&self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        &self.product_id == product_id && self.variant_id.as_ref() == variant_id
    }
}

/// Operations a cart store provides.
///
/// Lines are keyed by `(product_id, variant_id)`.
pub trait CartState {
    /// Current lines, in insertion order.
    fn items(&self) -> &[CartItem];

    /// Add `quantity` (default 1) units. Adding an existing line increases
    /// its quantity.
    fn add_item(&mut self, product: Product, variant: Option<ProductVariant>, quantity: Option<u32>);

    /// Remove a line entirely. Unknown lines are ignored.
    fn remove_item(&mut self, product_id: &ProductId, variant_id: Option<&VariantId>);

    /// Set a line's quantity; zero removes it. Unknown lines are ignored.
    fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
        variant_id: Option<&VariantId>,
    );

    /// Remove every line.
    fn clear_cart(&mut self);

    /// Sum of line totals.
    fn total(&self) -> Decimal {
        self.items().iter().map(CartItem::line_total).sum()
    }

    /// Number of units across all lines.
    fn item_count(&self) -> u32 {
        self.items().iter().map(|item| item.quantity).sum()
    }
}

/// A cart held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCart {
    items: Vec<CartItem>,
}

impl MemoryCart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartState for MemoryCart {
    fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn add_item(&mut self, product: Product, variant: Option<ProductVariant>, quantity: Option<u32>) {
        let quantity = quantity.unwrap_or(1);
        if quantity == 0 {
            return;
        }

        let variant_id = variant.as_ref().map(|v| v.id.clone());
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, variant_id.as_ref()))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            variant_id,
            quantity,
            product,
            variant,
        });
    }

    fn remove_item(&mut self, product_id: &ProductId, variant_id: Option<&VariantId>) {
        self.items.retain(|item| !item.matches(product_id, variant_id));
    }

    fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
        variant_id: Option<&VariantId>,
    ) {
        if quantity == 0 {
            self.remove_item(product_id, variant_id);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, variant_id))
        {
            item.quantity = quantity;
        }
    }

    fn clear_cart(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::product::fixtures::{product, variant};

    #[test]
    fn test_add_defaults_to_one_and_merges() {
        let mut cart = MemoryCart::new();
        cart.add_item(product("wallet", 700, Some(420)), None, None);
        cart.add_item(product("wallet", 700, Some(420)), None, Some(2));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_variants_are_separate_lines() {
        let mut cart = MemoryCart::new();
        let coat = product("coat", 1999, None);
        cart.add_item(coat.clone(), Some(variant("coat-s", "coat", 0)), None);
        cart.add_item(coat.clone(), Some(variant("coat-l", "coat", 50)), None);
        cart.add_item(coat, None, None);

        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = MemoryCart::new();
        cart.add_item(product("bag", 100, None), None, Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_uses_sale_price_and_modifier() {
        let mut cart = MemoryCart::new();
        cart.add_item(product("wallet", 700, Some(420)), None, Some(2));
        cart.add_item(
            product("coat", 1999, None),
            Some(variant("coat-l", "coat", 100)),
            Some(1),
        );

        // 2 × 420 + (1999 + 100)
        assert_eq!(cart.total(), Decimal::from(2939));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = MemoryCart::new();
        let id = ProductId::new("bracelet");
        cart.add_item(product("bracelet", 7300, None), None, None);

        cart.update_quantity(&id, 4, None);
        assert_eq!(cart.item_count(), 4);

        cart.update_quantity(&ProductId::new("unknown"), 9, None);
        assert_eq!(cart.item_count(), 4);

        cart.update_quantity(&id, 0, None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_matches_variant() {
        let mut cart = MemoryCart::new();
        let coat = product("coat", 1999, None);
        cart.add_item(coat.clone(), Some(variant("coat-s", "coat", 0)), None);
        cart.add_item(coat, None, None);

        cart.remove_item(&ProductId::new("coat"), Some(&VariantId::new("coat-s")));
        assert_eq!(cart.items().len(), 1);
        assert!(cart.items()[0].variant_id.is_none());
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = MemoryCart::new();
        cart.add_item(product("bag", 100, None), None, Some(5));
        cart.clear_cart();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}
