//! Integration tests for the overdue listing and the service routes.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use helpers::TestApp;

async fn seed(app: &TestApp) -> (i64, i64, i64, i64) {
    let zoe = app.create_customer("Zoe Park", "30003", "555-0003").await;
    let amy = app.create_customer("Amy Wu", "10001", "555-0001").await;
    let alien = app.create_video("Alien", "1979-05-25", 2).await;
    let heat = app.create_video("Heat", "1995-12-15", 2).await;
    (zoe, amy, alien, heat)
}

#[tokio::test]
async fn test_nothing_overdue_before_due_date() {
    let app = TestApp::new();
    let (zoe, _, alien, _) = seed(&app).await;
    app.check_out(zoe, alien).await;

    app.clock.advance(Duration::days(7));
    let response = app.request("GET", "/rentals/overdue", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.len(), 0, "due exactly now is not overdue");
}

#[tokio::test]
async fn test_overdue_follows_clock() {
    let app = TestApp::new();
    let (zoe, amy, alien, heat) = seed(&app).await;
    app.check_out(zoe, alien).await;
    app.clock.advance(Duration::days(1));
    app.check_out(amy, heat).await;

    app.clock.advance(Duration::days(7) + Duration::seconds(1));
    let response = app.request("GET", "/rentals/overdue", None).await;
    assert_eq!(response.len(), 2);
    let first = &response.body[0];
    assert_eq!(first["video_id"], alien);
    assert_eq!(first["title"], "Alien");
    assert_eq!(first["customer_id"], zoe);
    assert_eq!(first["name"], "Zoe Park");
    assert_eq!(first["postal_code"], "30003");
    assert_eq!(first["due_date"], "2024-01-08T12:00:00Z");
    assert!(first.get("rental_id").is_none());
    assert_eq!(response.body[1]["name"], "Amy Wu");

    let by_name = app.request("GET", "/rentals/overdue?order_by=name", None).await;
    assert_eq!(by_name.body[0]["name"], "Amy Wu");
    assert_eq!(by_name.body[1]["name"], "Zoe Park");

    let desc = app.request("GET", "/rentals/overdue?sort=desc", None).await;
    assert_eq!(desc.body[0]["title"], "Heat");
}

#[tokio::test]
async fn test_as_of_pins_reference_time() {
    let app = TestApp::new();
    let (zoe, amy, alien, heat) = seed(&app).await;
    app.check_out(zoe, alien).await;
    app.clock.advance(Duration::days(2));
    app.check_out(amy, heat).await;

    let response = app
        .request("GET", "/rentals/overdue?as_of=2024-01-09T00:00:00Z", None)
        .await;
    assert_eq!(response.len(), 1);
    assert_eq!(response.body[0]["title"], "Alien");

    let later = app
        .request("GET", "/rentals/overdue?as_of=2024-02-01T00:00:00%2B02:00", None)
        .await;
    assert_eq!(later.len(), 2);

    app.request("GET", "/rentals/overdue?as_of=yesterday", None)
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Invalid as_of 'yesterday': expected an RFC 3339 timestamp",
        );
}

#[tokio::test]
async fn test_returned_rentals_are_never_overdue() {
    let app = TestApp::new();
    let (zoe, amy, alien, heat) = seed(&app).await;
    app.check_out(zoe, alien).await;
    app.check_out(amy, heat).await;

    app.clock.advance(Duration::days(10));
    app.check_in(zoe, alien).await;

    let response = app.request("GET", "/rentals/overdue", None).await;
    assert_eq!(response.len(), 1);
    assert_eq!(response.body[0]["customer_id"], amy);
}

#[tokio::test]
async fn test_overdue_rejects_unknown_sort_field() {
    let app = TestApp::new();

    app.request("GET", "/rentals/overdue?order_by=rental_id", None)
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Unknown sort field 'rental_id'",
        );
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();

    app.request("GET", "/tapes", None).await.assert_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "No route for /tapes",
    );
}
