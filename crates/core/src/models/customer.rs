//! User and address models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AddressId, Email, UserId};

/// A registered shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name to greet the user with, falling back to the email's local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.email.local_part())
    }
}

/// A shipping address belonging to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    /// At most one address per user is expected to carry this flag.
    pub is_default: bool,
}

impl Address {
    /// The default address of `user` among `addresses`.
    ///
    /// When more than one is flagged, the first one wins.
    #[must_use]
    pub fn default_for<'a>(user: &UserId, addresses: &'a [Self]) -> Option<&'a Self> {
        addresses
            .iter()
            .find(|address| &address.user_id == user && address.is_default)
    }

    /// Single-line rendering for order summaries.
    #[must_use]
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address_line1.as_str()];
        if let Some(line2) = self.address_line2.as_deref().filter(|l| !l.is_empty()) {
            parts.push(line2);
        }
        let locality = format!("{}, {} {}", self.city, self.state, self.zip_code);
        format!("{}, {locality}, {}", parts.join(", "), self.country)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address(id: &str, user: &str, is_default: bool) -> Address {
        Address {
            id: AddressId::new(id),
            user_id: UserId::new(user),
            full_name: "Aline Mart".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address_line1: "123 Luxury Avenue".to_string(),
            address_line2: Some("Fashion District".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "US".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_default_for_picks_first_flagged_for_user() {
        let addresses = vec![
            address("a1", "u1", false),
            address("a2", "u2", true),
            address("a3", "u1", true),
            address("a4", "u1", true),
        ];
        let found = Address::default_for(&UserId::new("u1"), &addresses).unwrap();
        assert_eq!(found.id.as_str(), "a3");
        assert!(Address::default_for(&UserId::new("u3"), &addresses).is_none());
    }

    #[test]
    fn test_one_line() {
        assert_eq!(
            address("a1", "u1", true).one_line(),
            "123 Luxury Avenue, Fashion District, New York, NY 10001, US"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = User {
            id: UserId::new("u1"),
            email: Email::parse("hello@alinemart.com").unwrap(),
            name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.display_name(), "hello");

        user.name = Some("Aline".to_string());
        assert_eq!(user.display_name(), "Aline");
    }
}
