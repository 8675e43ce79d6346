//! Aline Mart Core - Shared domain types.
//!
//! This crate provides the catalog and commerce types used by the storefront:
//! - `types` - Newtype wrappers for IDs, emails, prices, and statuses
//! - `models` - Brand, category, product, user, order, wishlist, and cart shapes
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! persistence. The models describe the data a future catalog backend will
//! serve; today the storefront uses them for its showcase content.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
