//! End-to-end cart flows through the storefront router.
//!
//! Each test gets its own server (and therefore its own in-memory session
//! store); cookies are kept between requests, so a test behaves like one
//! browser tab.

use axum_test::TestServer;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use session_cart_core::{Currency, Product, ProductId};
use session_cart_integration_tests::{count_items, test_server, test_server_with};
use session_cart_storefront::catalog::Catalog;
use session_cart_storefront::config::StorefrontConfig;

async fn add(server: &TestServer, product_id: &str) -> String {
    let response = server
        .post("/cart/add")
        .form(&[("product_id", product_id)])
        .await;
    response.assert_status_ok();
    response.text()
}

async fn stored_cart(server: &TestServer) -> Value {
    let response = server.get("/api/cart").await;
    response.assert_status_ok();
    response.json::<Value>()
}

// ============================================================================
// Page-ready
// ============================================================================

#[tokio::test]
async fn test_fresh_session_shows_products_and_empty_cart() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains(r#"id="product-list""#));
    assert!(html.contains(r#"id="cart-list""#));
    assert!(html.contains(r#"id="clear-cart-btn""#));
    // Five products, no cart items
    assert_eq!(count_items(&html), 5);
    assert!(!html.contains("data-cart-index"));
}

#[tokio::test]
async fn test_product_fragment_lists_catalog_in_order() {
    let server = test_server();

    let html = server.get("/products").await.text();

    assert_eq!(count_items(&html), 5);
    for n in 1..=5 {
        assert!(html.contains(&format!(r#"data-product-id="{n}""#)));
        assert!(html.contains(&format!("₹{}", n * 10)));
    }
    let first = html.find("Product 1").unwrap_or(usize::MAX);
    let second = html.find("Product 2").unwrap_or(0);
    assert!(first < second);
}

#[tokio::test]
async fn test_persisted_cart_is_rendered_on_reload() {
    let server = test_server();
    add(&server, "3").await;

    let html = server.get("/").await.text();

    assert!(html.contains(r#"<li data-cart-index="0">Product 3 - ₹30</li>"#));
    assert_eq!(count_items(&html), 6);
}

// ============================================================================
// Add to cart
// ============================================================================

#[tokio::test]
async fn test_adding_same_product_twice() {
    let server = test_server();

    add(&server, "1").await;
    let html = add(&server, "1").await;

    assert_eq!(count_items(&html), 2);
    assert!(html.contains(r#"<li data-cart-index="0">Product 1 - ₹10</li>"#));
    assert!(html.contains(r#"<li data-cart-index="1">Product 1 - ₹10</li>"#));
}

#[tokio::test]
async fn test_n_adds_render_n_items_in_click_order() {
    let server = test_server();
    let clicks = ["5", "2", "2", "4", "1", "3"];

    let mut html = String::new();
    for id in clicks {
        html = add(&server, id).await;
    }

    assert_eq!(count_items(&html), clicks.len());
    for (index, id) in clicks.iter().enumerate() {
        let price = id.parse::<i32>().unwrap_or_default() * 10;
        let expected =
            format!(r#"<li data-cart-index="{index}">Product {id} - ₹{price}</li>"#);
        assert!(html.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn test_persisted_layout_after_two_products() {
    let server = test_server();
    add(&server, "1").await;
    add(&server, "2").await;

    assert_eq!(
        stored_cart(&server).await,
        json!([
            { "id": 1, "name": "Product 1", "price": 10 },
            { "id": 2, "name": "Product 2", "price": 20 },
        ])
    );
}

#[tokio::test]
async fn test_invalid_product_ids_are_ignored() {
    let server = test_server();
    add(&server, "2").await;

    for bad in ["99", "abc", ""] {
        let html = add(&server, bad).await;
        assert_eq!(count_items(&html), 1, "product_id={bad:?}");
        assert!(html.contains("Product 2 - ₹20"));
    }

    let response = server
        .post("/cart/add")
        .form(&Vec::<(String, String)>::new())
        .await;
    response.assert_status_ok();
    assert_eq!(count_items(&response.text()), 1);

    assert_eq!(
        stored_cart(&server).await,
        json!([{ "id": 2, "name": "Product 2", "price": 20 }])
    );
}

// ============================================================================
// Clear
// ============================================================================

#[tokio::test]
async fn test_clear_empties_cart() {
    let server = test_server();
    add(&server, "1").await;
    add(&server, "4").await;

    let response = server.post("/cart/clear").await;
    response.assert_status_ok();
    assert_eq!(count_items(&response.text()), 0);

    assert_eq!(count_items(&server.get("/cart").await.text()), 0);
    assert_eq!(stored_cart(&server).await, json!([]));
    // Only the five products remain on the page
    assert_eq!(count_items(&server.get("/").await.text()), 5);
}

#[tokio::test]
async fn test_clear_on_empty_cart() {
    let server = test_server();

    let response = server.post("/cart/clear").await;
    response.assert_status_ok();
    assert_eq!(count_items(&response.text()), 0);
    assert_eq!(count_items(&server.get("/cart").await.text()), 0);
}

#[tokio::test]
async fn test_add_after_clear_starts_from_empty() {
    let server = test_server();
    add(&server, "1").await;
    server.post("/cart/clear").await;

    let html = add(&server, "5").await;

    assert_eq!(count_items(&html), 1);
    assert!(html.contains(r#"<li data-cart-index="0">Product 5 - ₹50</li>"#));
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_currency_and_fractional_prices() {
    let config = StorefrontConfig {
        currency: Currency::USD,
        ..StorefrontConfig::default()
    };
    let catalog = Catalog::new(vec![Product::new(
        ProductId::new(7),
        "Tea",
        Decimal::new(125, 1),
    )]);
    let server = test_server_with(config, catalog);

    let html = add(&server, "7").await;

    assert!(html.contains("Tea - $12.5"));
    assert_eq!(
        stored_cart(&server).await,
        json!([{ "id": 7, "name": "Tea", "price": 12.5 }])
    );
}

// ============================================================================
// Ambient routes
// ============================================================================

#[tokio::test]
async fn test_health() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = test_server();

    let response = server
        .get("/health")
        .add_header("x-request-id", "req-123")
        .await;

    assert_eq!(response.header("x-request-id"), "req-123");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server();

    server.get("/checkout").await.assert_status_not_found();
}
