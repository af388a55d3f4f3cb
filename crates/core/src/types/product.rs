//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{Currency, Price, amount_number};

/// A purchasable product.
///
/// Products are defined once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Non-negative unit price.
    #[serde(with = "amount_number")]
    pub price: Decimal,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// The product's price labelled with `currency`.
    #[must_use]
    pub const fn price_in(&self, currency: Currency) -> Price {
        Price::new(self.price, currency)
    }
}
