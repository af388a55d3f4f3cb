//! Session Cart Core - Shared domain types.
//!
//! This crate provides the types shared by the storefront and its tests:
//! products, cart entries, carts, and price formatting.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no session access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products and carts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
