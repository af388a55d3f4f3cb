//! Session-backed cart storage.

use session_cart_core::Cart;
use tower_sessions::Session;

use super::{CART_KEY, CartStorage, StorageError, decode_cart, encode_cart};

/// Stores the cart as JSON text in the visitor's session.
///
/// The session cookie carries no expiry, so the cart lives exactly as long
/// as the browser session.
#[derive(Debug, Clone)]
pub struct SessionCartStorage {
    session: Session,
}

impl SessionCartStorage {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CartStorage for SessionCartStorage {
    async fn load(&self) -> Cart {
        match self.session.get::<String>(CART_KEY).await {
            Ok(Some(raw)) => decode_cart(&raw),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read cart from session");
                Cart::new()
            }
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = encode_cart(cart)?;
        self.session.insert(CART_KEY, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.session.remove_value(CART_KEY).await?;
        Ok(())
    }
}
