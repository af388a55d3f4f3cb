//! Cart storage adapter.
//!
//! All access to the session-scoped store goes through [`CartStorage`], so
//! handlers never touch session keys directly and tests can swap in
//! [`MemoryCartStorage`].
//!
//! The stored value is the cart's JSON text under [`CART_KEY`]. Reads are
//! forgiving: an absent, unreadable, or malformed value loads as an empty
//! cart and is only logged. Writes report failures to the caller.

mod memory;
mod session;

use std::future::Future;

use session_cart_core::Cart;

pub use memory::MemoryCartStorage;
pub use session::SessionCartStorage;

/// Session key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Errors writing the cart to storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The session store rejected the operation.
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The cart could not be serialized.
    #[error("cart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Narrow interface over the session-scoped key-value store.
pub trait CartStorage: Send + Sync {
    /// Load the persisted cart.
    ///
    /// Never fails: missing or corrupt data yields an empty cart.
    fn load(&self) -> impl Future<Output = Cart> + Send;

    /// Overwrite the persisted cart with `cart`.
    fn save(&self, cart: &Cart) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove the persisted cart entirely.
    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Serialize a cart to the stored JSON text.
pub(crate) fn encode_cart(cart: &Cart) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart)
}

/// Parse stored JSON text into a cart, degrading to empty on any problem.
pub(crate) fn decode_cart(raw: &str) -> Cart {
    if raw.is_empty() {
        return Cart::new();
    }

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse stored cart");
            return Cart::new();
        }
    };

    if !value.is_array() {
        tracing::debug!("Stored cart is not an array, treating as empty");
        return Cart::new();
    }

    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored cart has malformed entries, treating as empty");
        Cart::new()
    })
}
