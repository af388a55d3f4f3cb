//! Integration tests for the session cart storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p session-cart-integration-tests
//! ```
//!
//! Tests drive the full router in-process with `axum-test`, saving cookies
//! between requests so that consecutive requests share one session.

use axum_test::TestServer;
use session_cart_storefront::catalog::Catalog;
use session_cart_storefront::config::StorefrontConfig;
use session_cart_storefront::routes;
use session_cart_storefront::state::AppState;

/// Build a cookie-saving test server over the built-in catalog.
///
/// # Panics
///
/// Panics if the test server cannot be created.
#[must_use]
pub fn test_server() -> TestServer {
    test_server_with(StorefrontConfig::default(), Catalog::default())
}

/// Build a cookie-saving test server over `catalog`.
///
/// # Panics
///
/// Panics if the test server cannot be created.
#[must_use]
pub fn test_server_with(config: StorefrontConfig, catalog: Catalog) -> TestServer {
    let app = routes::router(AppState::with_catalog(config, catalog));
    TestServer::builder()
        .save_cookies()
        .build(app)
        .expect("Failed to create test server")
}

/// Number of `<li` elements in an HTML fragment.
#[must_use]
pub fn count_items(html: &str) -> usize {
    html.matches("<li").count()
}
