//! Brand model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::BrandId;

/// A fashion house or label carried by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    /// URL-safe identifier, e.g. `louis-vuitton`.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Brand {
    /// Create a brand with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<BrandId>, name: &str, slug: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            slug: slug.to_string(),
            logo: None,
            description: None,
            created_at,
        }
    }

    /// Storefront path listing this brand's products.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/brands/{}", self.slug)
    }
}
