//! Newtype IDs for type-safe entity references.
//!
//! Catalog identifiers are opaque strings (slugs, CUIDs, or upstream IDs).
//! The `define_id!` macro wraps them per entity so a `BrandId` can never be
//! passed where a `ProductId` is expected.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>`, and `From<&str>`/`From<String>`
///
/// # Example
///
/// ```rust
/// # use aline_mart_core::define_id;
/// define_id!(ShelfId);
/// define_id!(AisleId);
///
/// let shelf = ShelfId::new("shelf-1");
/// let aisle = AisleId::new("shelf-1");
/// assert_eq!(shelf.as_str(), aisle.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = aisle;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the underlying identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

// Catalog
define_id!(BrandId);
define_id!(CategoryId);
define_id!(ProductId);
define_id!(ImageId);
define_id!(VariantId);

// Customers
define_id!(UserId);
define_id!(AddressId);
define_id!(WishlistItemId);

// Orders
define_id!(OrderId);
define_id!(OrderItemId);
