//! Catalog and commerce models.
//!
//! Field names serialize in `camelCase` so the shapes match the JSON a
//! catalog API would exchange with the browser.

pub mod brand;
pub mod cart;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;
pub mod wishlist;

pub use brand::Brand;
pub use cart::{CartItem, CartState, MemoryCart};
pub use category::Category;
pub use customer::{Address, User};
pub use order::{Order, OrderItem};
pub use product::{Product, ProductImage, ProductVariant};
pub use wishlist::WishlistItem;
