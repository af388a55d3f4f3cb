//! Page-ready document.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::state::AppState;
use crate::storage::SessionCartStorage;
use crate::views::cart::CartItemView;
use crate::views::products::ProductItemView;
use crate::views::{cart as cart_view, products as product_view};

/// Full page template.
///
/// Embeds the product and cart partials, which read `products` and `items`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub products: Vec<ProductItemView>,
    pub items: Vec<CartItemView>,
}

/// Render the catalog and the persisted cart.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> IndexTemplate {
    let storage = SessionCartStorage::new(session);
    let currency = state.currency();

    let cart = cart_view::render(&storage, None, currency).await;

    IndexTemplate {
        products: product_view::items(state.catalog(), currency),
        items: cart.items,
    }
}
