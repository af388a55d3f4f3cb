//! Cart route handlers.
//!
//! Cart operations use HTMX: each action responds with the full content of
//! `#cart-list`, which the client swaps in. The cart itself lives in the
//! session (see [`crate::storage`]).

use axum::{Form, Json, extract::State};
use serde::Deserialize;
use session_cart_core::{Cart, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::CartModel;
use crate::error::Result;
use crate::state::AppState;
use crate::storage::{CartStorage, SessionCartStorage};
use crate::views::cart::{self as cart_view, CartListTemplate};

/// Add to cart form data.
///
/// The ID stays a string so that a missing or non-numeric value is ignored
/// rather than rejected.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: Option<String>,
}

impl AddToCartForm {
    fn product_id(&self) -> Option<ProductId> {
        self.product_id.as_deref()?.parse().ok()
    }
}

fn cart_model(session: Session) -> CartModel<SessionCartStorage> {
    CartModel::new(SessionCartStorage::new(session))
}

/// Cart list items (HTMX).
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> CartListTemplate {
    let storage = SessionCartStorage::new(session);
    cart_view::render(&storage, None, state.currency()).await
}

/// Add a product to the cart (HTMX).
///
/// Unknown or missing product IDs leave the cart untouched; the response is
/// then the stored cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<CartListTemplate> {
    let product = form
        .product_id()
        .and_then(|id| state.catalog().get(id));

    let model = cart_model(session);
    let cart = model.add_entry(product).await?;

    Ok(cart_view::render(model.storage(), cart, state.currency()).await)
}

/// Clear the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<CartListTemplate> {
    let model = cart_model(session);
    let cart = model.clear().await?;

    Ok(cart_view::render(model.storage(), Some(cart), state.currency()).await)
}

/// Stored cart as its JSON array.
#[instrument(skip(session))]
pub async fn json(session: Session) -> Json<Cart> {
    Json(SessionCartStorage::new(session).load().await)
}
