//! Integration tests for the customer endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_create_and_fetch_customer() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/customers",
            Some(json!({"name": "Ellen Ripley", "postal_code": "10001", "phone": "555-0199"})),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.id();

    let fetched = app.request("GET", &format!("/customers/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body,
        json!({"id": id, "name": "Ellen Ripley", "postal_code": "10001", "phone": "555-0199"})
    );
}

#[tokio::test]
async fn test_create_requires_every_field() {
    let app = TestApp::new();

    app.request("POST", "/customers", Some(json!({"name": "Ripley", "postal_code": "10001"})))
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Request body must include phone.",
        );

    app.request("POST", "/customers", Some(json!({"name": "Ripley", "phone": "555-0199"})))
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Request body must include postal_code.",
        );
}

#[tokio::test]
async fn test_list_filters_combine() {
    let app = TestApp::new();
    app.create_customer("Ann Lee", "10001", "555-0001").await;
    app.create_customer("Anna Kim", "20002", "555-0002").await;
    app.create_customer("Bob Annand", "10001", "555-0003").await;
    app.create_customer("Carl", "10001", "555-0004").await;

    let by_name = app.request("GET", "/customers?name=Ann", None).await;
    assert_eq!(by_name.len(), 3);

    let case_sensitive = app.request("GET", "/customers?name=ann", None).await;
    assert_eq!(case_sensitive.len(), 0);

    let both = app
        .request("GET", "/customers?name=Ann&postal_code=100&sort=desc", None)
        .await;
    assert_eq!(both.len(), 2);
    assert_eq!(both.body[0]["name"], "Bob Annand");
    assert_eq!(both.body[1]["name"], "Ann Lee");
}

#[tokio::test]
async fn test_order_by_multiple_keys() {
    let app = TestApp::new();
    let first = app.create_customer("Zed", "20002", "555-0001").await;
    let second = app.create_customer("Amy", "10001", "555-0002").await;
    let third = app.create_customer("Amy", "20002", "555-0003").await;

    let response = app
        .request("GET", "/customers?order_by=-postal_code,name", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<i64> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [third, first, second]);
}

#[tokio::test]
async fn test_update_replaces_only_present_fields() {
    let app = TestApp::new();
    let id = app.create_customer("Ann Lee", "10001", "555-0001").await;

    let updated = app
        .request("PUT", &format!("/customers/{id}"), Some(json!({"name": "Ann Leigh", "phone": "555-9999"})))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.body,
        json!({"id": id, "name": "Ann Leigh", "postal_code": "10001", "phone": "555-9999"})
    );

    app.request("PUT", &format!("/customers/{id}"), Some(json!({"phone": "555-1111"})))
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Request body must include name.",
        );
}

#[tokio::test]
async fn test_delete_customer() {
    let app = TestApp::new();
    let id = app.create_customer("Ann Lee", "10001", "555-0001").await;

    let deleted = app.request("DELETE", &format!("/customers/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["name"], "Ann Lee");

    app.request("DELETE", &format!("/customers/{id}"), None)
        .await
        .assert_error(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            &format!("Customer {id} was not found"),
        );
}

#[tokio::test]
async fn test_delete_blocked_while_renting() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let video = app.create_video("Alien", "1979-05-25", 1).await;
    app.check_out(customer, video).await;

    let blocked = app.request("DELETE", &format!("/customers/{customer}"), None).await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.body["error"], "INVALID_STATE");

    app.check_in(customer, video).await;
    let deleted = app.request("DELETE", &format!("/customers/{customer}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let renters = app.request("GET", &format!("/videos/{video}/rentals"), None).await;
    assert_eq!(renters.len(), 0);
}

#[tokio::test]
async fn test_videos_held_by_customer() {
    let app = TestApp::new();
    let customer = app.create_customer("Ann Lee", "10001", "555-0001").await;
    let alien = app.create_video("Alien", "1979-05-25", 1).await;
    let heat = app.create_video("Heat", "1995-12-15", 1).await;
    let thing = app.create_video("The Thing", "1982-06-25", 1).await;

    app.check_out(customer, heat).await;
    app.clock.advance(chrono::Duration::hours(2));
    app.check_out(customer, alien).await;
    app.check_out(customer, thing).await;
    app.check_in(customer, thing).await;

    let held = app.request("GET", &format!("/customers/{customer}/rentals"), None).await;
    assert_eq!(held.status, StatusCode::OK);
    assert_eq!(held.len(), 2);
    assert_eq!(held.body[0]["title"], "Heat");
    assert_eq!(held.body[0]["release_date"], "1995-12-15");
    assert_eq!(held.body[0]["due_date"], "2024-01-08T12:00:00Z");
    assert_eq!(held.body[1]["title"], "Alien");
    assert_eq!(held.body[1]["due_date"], "2024-01-08T14:00:00Z");

    app.request("GET", "/customers/404/rentals", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Customer 404 was not found");
}
