//! Cart and cart entry types.
//!
//! A [`Cart`] is an ordered list of [`CartEntry`] snapshots. Its JSON form is
//! a bare array of `{ "id", "name", "price" }` objects, which is exactly the
//! layout kept in the session store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{Currency, Price, amount_number};
use super::product::Product;

/// A copy of a product taken at the moment it was added to the cart.
///
/// Entries do not reference the catalog; later product changes would not
/// show up in carts that already hold the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "amount_number")]
    pub price: Decimal,
}

impl CartEntry {
    /// Snapshot the current fields of `product`.
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }

    /// The entry's price labelled with `currency`.
    #[must_use]
    pub const fn price_in(&self, currency: Currency) -> Price {
        Price::new(self.price, currency)
    }
}

/// Ordered cart contents. Insertion order is preserved and duplicates are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<CartEntry>);

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: CartEntry) {
        self.0.push(entry);
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.0
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
