//! Product route handlers.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::views::products::{self, ProductListTemplate};

/// Product list items (HTMX).
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ProductListTemplate {
    products::render(state.catalog(), state.currency())
}
