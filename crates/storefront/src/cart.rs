//! Cart model.
//!
//! Mutations are write-through: each one loads the stored cart, applies the
//! change, persists it, and hands the persisted cart back so the caller can
//! render without a second load.

use session_cart_core::{Cart, CartEntry, Product};
use tracing::instrument;

use crate::storage::{CartStorage, StorageError};

/// Cart operations over a [`CartStorage`].
#[derive(Debug, Clone)]
pub struct CartModel<S> {
    storage: S,
}

impl<S: CartStorage> CartModel<S> {
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage, for rendering views from the same session.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a snapshot of `product` to the stored cart.
    ///
    /// Returns `Ok(None)` without touching storage when no product was
    /// given, otherwise the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart could not be saved.
    #[instrument(skip_all, fields(product_id = product.map(|p| p.id.as_i32())))]
    pub async fn add_entry(&self, product: Option<&Product>) -> Result<Option<Cart>, StorageError> {
        let Some(product) = product else {
            tracing::debug!("Ignoring add without a product");
            return Ok(None);
        };

        let mut cart = self.storage.load().await;
        cart.push(CartEntry::snapshot(product));
        self.storage.save(&cart).await?;

        tracing::info!(items = cart.len(), "Added product to cart");
        Ok(Some(cart))
    }

    /// Remove the stored cart and return an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage could not be cleared.
    #[instrument(skip_all)]
    pub async fn clear(&self) -> Result<Cart, StorageError> {
        self.storage.clear().await?;
        tracing::info!("Cleared cart");
        Ok(Cart::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use session_cart_core::ProductId;

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryCartStorage;

    fn model() -> CartModel<MemoryCartStorage> {
        CartModel::new(MemoryCartStorage::new())
    }

    #[tokio::test]
    async fn test_add_without_product_is_noop() {
        let model = model();
        let result = model.add_entry(None).await.unwrap();

        assert!(result.is_none());
        assert!(model.storage().raw().is_none());
    }

    #[tokio::test]
    async fn test_add_returns_what_was_persisted() {
        let model = model();
        let catalog = Catalog::default();

        let cart = model
            .add_entry(catalog.get(ProductId::new(1)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(model.storage().load().await, cart);
    }

    #[tokio::test]
    async fn test_adds_accumulate_in_click_order() {
        let model = model();
        let catalog = Catalog::default();
        let clicks = [3, 1, 3, 5, 2];

        for id in clicks {
            model.add_entry(catalog.get(ProductId::new(id))).await.unwrap();
        }

        let cart = model.storage().load().await;
        let ids: Vec<i32> = cart.iter().map(|e| e.id.as_i32()).collect();
        assert_eq!(ids, clicks.to_vec());
    }

    #[tokio::test]
    async fn test_persisted_layout_after_two_products() {
        let model = model();
        let catalog = Catalog::default();
        model.add_entry(catalog.get(ProductId::new(1))).await.unwrap();
        model.add_entry(catalog.get(ProductId::new(2))).await.unwrap();

        let raw = model.storage().raw().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            json!([
                { "id": 1, "name": "Product 1", "price": 10 },
                { "id": 2, "name": "Product 2", "price": 20 },
            ])
        );
    }

    #[tokio::test]
    async fn test_add_after_corrupt_storage_starts_fresh() {
        let model = model();
        model.storage().set_raw("definitely not json");
        let product = Product::new(ProductId::new(9), "Loose Leaf", Decimal::new(125, 1));

        let cart = model.add_entry(Some(&product)).await.unwrap().unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(
            model.storage().raw().as_deref(),
            Some(r#"[{"id":9,"name":"Loose Leaf","price":12.5}]"#)
        );
    }

    #[tokio::test]
    async fn test_clear_removes_stored_cart() {
        let model = model();
        let catalog = Catalog::default();
        model.add_entry(catalog.get(ProductId::new(4))).await.unwrap();

        let cart = model.clear().await.unwrap();

        assert!(cart.is_empty());
        assert!(model.storage().raw().is_none());
    }

    #[tokio::test]
    async fn test_clear_on_empty_cart() {
        let model = model();
        assert!(model.clear().await.unwrap().is_empty());
        assert!(model.storage().load().await.is_empty());
    }
}
