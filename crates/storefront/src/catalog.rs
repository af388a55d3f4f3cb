//! Fixed product catalog.

use rust_decimal::Decimal;
use session_cart_core::{Product, ProductId};

/// Ordered, immutable list of products defined at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from `products`, keeping their order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The built-in five-product catalog: `Product 1` at 10 through `Product 5`
/// at 50.
impl Default for Catalog {
    fn default() -> Self {
        let products = (1..=5)
            .map(|n: i32| {
                Product::new(
                    ProductId::new(n),
                    format!("Product {n}"),
                    Decimal::from(n * 10),
                )
            })
            .collect();
        Self::new(products)
    }
}
