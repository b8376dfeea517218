//! Toast notification queue semantics.

use axum::http::StatusCode;
use pulseira_integration_tests::support::TestClient;

#[tokio::test]
async fn test_add_queues_one_info_notification() {
    let mut client = TestClient::new();
    client
        .post_form("/cart/add", "product_id=a&name=Star&price=10.00")
        .await;

    let response = client.get("/notifications").await;
    assert_eq!(response.status, StatusCode::OK);

    let pending = response.json();
    let list = pending.as_array().expect("notification array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["severity"], "info");
    assert!(
        list[0]["description"]
            .as_str()
            .expect("description string")
            .contains("Star")
    );
}

#[tokio::test]
async fn test_drain_is_destructive() {
    let mut client = TestClient::new();
    client
        .post_form("/cart/add", "product_id=a&name=Star&price=10.00")
        .await;

    let first = client.get("/notifications").await.json();
    assert_eq!(first.as_array().expect("array").len(), 1);

    let second = client.get("/notifications").await.json();
    assert_eq!(second.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_noop_remove_still_notifies() {
    // Inherited UX quirk, kept deliberately: a remove fires its toast even
    // when nothing was removed.
    let mut client = TestClient::new();
    client.post_form("/cart/remove", "product_id=absent").await;

    let pending = client.get("/notifications").await.json();
    let list = pending.as_array().expect("notification array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["severity"], "destructive");
}

#[tokio::test]
async fn test_checkout_queues_submitted_notification() {
    let mut client = TestClient::new();
    client
        .post_form("/cart/add", "product_id=a&name=Star&price=10.00")
        .await;
    client.get("/notifications").await; // drain the add toast
    client.get("/checkout").await;

    let pending = client.get("/notifications").await.json();
    let list = pending.as_array().expect("notification array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["severity"], "info");
    assert_eq!(list[0]["title"], "Pedido enviado com sucesso! 💕");
}

#[tokio::test]
async fn test_empty_checkout_queues_nothing() {
    let mut client = TestClient::new();
    client.get("/checkout").await;

    let pending = client.get("/notifications").await.json();
    assert_eq!(pending.as_array().expect("array").len(), 0);
}
