//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Page: product list, cart list, clear button
//! GET  /health                 - Health check
//!
//! # Products (HTMX fragment)
//! GET  /products               - Product list items
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart list items from the session
//! POST /cart/add               - Add product (form: product_id), returns cart items
//! POST /cart/clear             - Clear cart, returns (empty) cart items
//!
//! # API
//! GET  /api/cart               - Stored cart as a JSON array
//! ```

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    extract::Request,
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/clear", post(cart::clear))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/cart", get(cart::json))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Page-ready document
        .route("/", get(home::index))
        // Product list fragment
        .route("/products", get(products::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // JSON API
        .nest("/api", api_routes())
}

/// Build the complete application: routes, sessions, request tracing.
///
/// Sentry layers are added by the binary so tests can build the router
/// without a Sentry client.
pub fn router(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
        )
    });

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(middleware::from_fn(request_id_middleware))
                .layer(session_layer),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
