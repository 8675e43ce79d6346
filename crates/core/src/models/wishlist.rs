//! Wishlist model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, UserId, WishlistItemId};

/// A product saved by a user for later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}
