//! Integration tests for checkout and check-in.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_checkout_returns_receipt() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Alien", "1979-05-25", 3).await;

    let receipt = app.check_out(customer, video).await;
    assert_eq!(receipt.status, StatusCode::OK);
    assert_eq!(
        receipt.body,
        json!({
            "customer_id": customer,
            "video_id": video,
            "due_date": "2024-01-08T12:00:00Z",
            "videos_checked_out_count": 1,
            "available_inventory": 2,
        })
    );

    let second = app.check_out(customer, video).await;
    assert_eq!(second.body["videos_checked_out_count"], 2);
    assert_eq!(second.body["available_inventory"], 1);
}

#[tokio::test]
async fn test_single_copy_cannot_be_checked_out_twice() {
    let app = TestApp::new();
    let ann = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let bob = app.create_customer("Bob Roy", "20002", "555-0002").await;
    let video = app.create_video("Alien", "1979-05-25", 1).await;

    assert_eq!(app.check_out(ann, video).await.status, StatusCode::OK);
    app.check_out(bob, video).await.assert_error(
        StatusCode::BAD_REQUEST,
        "CAPACITY_EXCEEDED",
        "Could not perform checkout",
    );

    let inventory = app.request("GET", &format!("/videos/{video}/inventory"), None).await;
    assert_eq!(inventory.body["videos_checked_out_count"], 1);
    assert_eq!(inventory.body["available_inventory"], 0);
}

#[tokio::test]
async fn test_zero_inventory_video_never_checks_out() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Lost Reel", "1930-01-01", 0).await;

    let response = app.check_out(customer, video).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CAPACITY_EXCEEDED");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_checkouts_respect_inventory() {
    let app = TestApp::new();
    let video = app.create_video("Alien", "1979-05-25", 2).await;
    let mut customers = Vec::new();
    for i in 0..10 {
        customers.push(app.create_customer(&format!("Customer {i}"), "10001", "555-0000").await);
    }

    let attempts = customers.iter().map(|&customer| app.check_out(customer, video));
    let responses = futures::future::join_all(attempts).await;

    let succeeded = responses.iter().filter(|r| r.status == StatusCode::OK).count();
    let rejected = responses
        .iter()
        .filter(|r| r.body["error"] == "CAPACITY_EXCEEDED")
        .count();
    assert_eq!(succeeded, 2);
    assert_eq!(rejected, 8);

    let inventory = app.request("GET", &format!("/videos/{video}/inventory"), None).await;
    assert_eq!(inventory.body["videos_checked_out_count"], 2);
}

#[tokio::test]
async fn test_check_in_without_rental_is_invalid_state() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Alien", "1979-05-25", 1).await;

    app.check_in(customer, video).await.assert_error(
        StatusCode::BAD_REQUEST,
        "INVALID_STATE",
        &format!("No outstanding rentals for customer {customer} and video {video}"),
    );
}

#[tokio::test]
async fn test_checkout_checkin_checkout_again() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Alien", "1979-05-25", 1).await;

    assert_eq!(app.check_out(customer, video).await.status, StatusCode::OK);

    app.clock.advance(chrono::Duration::days(2));
    let returned = app.check_in(customer, video).await;
    assert_eq!(returned.status, StatusCode::OK);
    assert_eq!(returned.body["due_date"], "2024-01-08T12:00:00Z");
    assert_eq!(returned.body["videos_checked_out_count"], 0);
    assert_eq!(returned.body["available_inventory"], 1);

    let again = app.check_out(customer, video).await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["due_date"], "2024-01-10T12:00:00Z");
}

#[tokio::test]
async fn test_check_in_closes_oldest_rental_first() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Alien", "1979-05-25", 2).await;

    app.check_out(customer, video).await;
    app.clock.advance(chrono::Duration::days(3));
    app.check_out(customer, video).await;

    let returned = app.check_in(customer, video).await;
    assert_eq!(returned.body["due_date"], "2024-01-08T12:00:00Z");
    assert_eq!(returned.body["videos_checked_out_count"], 1);

    let held = app.request("GET", &format!("/customers/{customer}/rentals"), None).await;
    assert_eq!(held.len(), 1);
    assert_eq!(held.body[0]["due_date"], "2024-01-11T12:00:00Z");
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Alien", "1979-05-25", 1).await;

    app.check_out(customer, 999).await.assert_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "Video 999 was not found",
    );
    app.check_out(999, video).await.assert_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "Customer 999 was not found",
    );
    let response = app.check_in(999, video).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rental_body_requires_both_ids() {
    let app = TestApp::new();

    app.request("POST", "/rentals/check-out", Some(json!({"video_id": 1})))
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Request body must include customer_id.",
        );
    app.request("POST", "/rentals/check-in", Some(json!({"customer_id": 1})))
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Request body must include video_id.",
        );
}
