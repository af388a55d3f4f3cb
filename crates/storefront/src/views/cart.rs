//! Cart list view.

use askama::Template;
use askama_web::WebTemplate;
use session_cart_core::{Cart, CartEntry, Currency};

use crate::storage::CartStorage;

/// Cart entry display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// `"<name> - <symbol><price>"`
    pub label: String,
}

impl CartItemView {
    fn new(entry: &CartEntry, currency: Currency) -> Self {
        Self {
            label: format!("{} - {}", entry.name, entry.price_in(currency)),
        }
    }
}

/// Content of `#cart-list` (for HTMX and the index page).
///
/// Items are tagged with their position in this render only; the index is
/// not a stable entry identifier.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_list.html")]
pub struct CartListTemplate {
    pub items: Vec<CartItemView>,
}

/// Render `cart`, or the stored cart when none is given.
pub async fn render<S: CartStorage>(
    storage: &S,
    cart: Option<Cart>,
    currency: Currency,
) -> CartListTemplate {
    let cart = match cart {
        Some(cart) => cart,
        None => storage.load().await,
    };
    CartListTemplate {
        items: items(&cart, currency),
    }
}

/// View data for each cart entry, in cart order.
#[must_use]
pub fn items(cart: &Cart, currency: Currency) -> Vec<CartItemView> {
    cart.iter()
        .map(|entry| CartItemView::new(entry, currency))
        .collect()
}
