//! Order and order item models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Address, User};
use crate::types::{AddressId, OrderId, OrderItemId, OrderStatus, ProductId, UserId, VariantId};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Customer-facing number, e.g. `AM-10042`.
    pub order_number: String,
    pub user_id: UserId,
    pub user: User,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub shipping_address_id: AddressId,
    pub shipping_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line totals recomputed from the snapshots.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// A line of an order.
///
/// Product and brand names are snapshotted at purchase time so the order
/// reads the same after the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
    pub quantity: u32,
    /// Unit price paid.
    pub price: Decimal,
    pub total: Decimal,
}

impl OrderItem {
    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
