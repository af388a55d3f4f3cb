//! In-memory cart storage for tests and local tooling.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use session_cart_core::Cart;

use super::{CartStorage, StorageError, decode_cart, encode_cart};

/// Holds the serialized cart text in memory.
///
/// Clones share the same slot, mirroring several handles onto one session.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryCartStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Replace the raw stored text, bypassing serialization.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot() = Some(raw.into());
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStorage for MemoryCartStorage {
    async fn load(&self) -> Cart {
        self.raw().map_or_else(Cart::new, |raw| decode_cart(&raw))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = encode_cart(cart)?;
        *self.slot() = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot() = None;
        Ok(())
    }
}
