//! Product list view.

use askama::Template;
use askama_web::WebTemplate;
use session_cart_core::{Currency, Product};

use crate::catalog::Catalog;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductItemView {
    pub id: i32,
    pub name: String,
    pub price: String,
}

impl ProductItemView {
    fn new(product: &Product, currency: Currency) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price_in(currency).to_string(),
        }
    }
}

/// Content of `#product-list` (for HTMX and the index page).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_list.html")]
pub struct ProductListTemplate {
    pub products: Vec<ProductItemView>,
}

/// Render every catalog product, in catalog order.
#[must_use]
pub fn render(catalog: &Catalog, currency: Currency) -> ProductListTemplate {
    ProductListTemplate {
        products: items(catalog, currency),
    }
}

/// View data for every catalog product, in catalog order.
#[must_use]
pub fn items(catalog: &Catalog, currency: Currency) -> Vec<ProductItemView> {
    catalog
        .products()
        .iter()
        .map(|p| ProductItemView::new(p, currency))
        .collect()
}
