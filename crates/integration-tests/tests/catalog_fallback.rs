//! Catalog failure tolerance.
//!
//! The harness points the catalog client at an unroutable port, so every
//! fetch fails. The contract is that the storefront keeps serving: product
//! routes answer 200 with an empty catalog and the cart flow is unaffected.

use axum::http::StatusCode;
use pulseira_integration_tests::support::TestClient;

#[tokio::test]
async fn test_failed_fetch_renders_as_empty_catalog() {
    let mut client = TestClient::new();

    let response = client.get("/products").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_home_aliases_product_listing() {
    let mut client = TestClient::new();

    let response = client.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json().is_array());
}

#[tokio::test]
async fn test_cart_flow_survives_catalog_outage() {
    let mut client = TestClient::new();

    let added = client
        .post_form("/cart/add", "product_id=a&name=Star&price=10.00")
        .await;
    assert_eq!(added.status, StatusCode::OK);

    let count = client.get("/cart/count").await.json();
    assert_eq!(count["count"], 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let mut client = TestClient::new();

    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}
