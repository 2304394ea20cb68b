//! Integration tests for the video catalog endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/videos",
            Some(json!({"title": "Matrix", "release_date": "1999-01-01", "total_inventory": 2})),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.id();

    let fetched = app.request("GET", &format!("/videos/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body,
        json!({"id": id, "title": "Matrix", "release_date": "1999-01-01", "total_inventory": 2})
    );
}

#[tokio::test]
async fn test_create_requires_every_field() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/videos", Some(json!({"title": "Heat", "release_date": "1995-12-15"})))
        .await;
    response.assert_error(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "Request body must include total_inventory.",
    );

    let response = app
        .request("POST", "/videos", Some(json!({"total_inventory": 1})))
        .await;
    response.assert_error(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "Request body must include title.",
    );
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
    let app = TestApp::new();

    let negative = app
        .request(
            "POST",
            "/videos",
            Some(json!({"title": "Heat", "release_date": "1995-12-15", "total_inventory": -1})),
        )
        .await;
    negative.assert_error(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "total_inventory must be zero or greater",
    );

    let wrong_type = app
        .request(
            "POST",
            "/videos",
            Some(json!({"title": "Heat", "release_date": "1995-12-15", "total_inventory": "two"})),
        )
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.body["error"], "VALIDATION_ERROR");

    let malformed = app.request_raw("POST", "/videos", "{\"title\": ").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_unknown_and_invalid_ids() {
    let app = TestApp::new();

    app.request("GET", "/videos/99", None).await.assert_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "Video 99 was not found",
    );

    for path in ["/videos/abc", "/videos/-4", "/videos/1.5"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR", "{path}");
    }

    app.request("GET", "/videos/0", None).await.assert_error(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "Video 0 was not found",
    );
    app.request("GET", "/customers/99999999999999999999", None)
        .await
        .assert_error(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Customer 99999999999999999999 was not found",
        );
}

#[tokio::test]
async fn test_list_filters_and_sorts() {
    let app = TestApp::new();
    let matrix = app.create_video("The Matrix", "1999-03-31", 1).await;
    let alien = app.create_video("Alien", "1979-05-25", 1).await;
    let thing = app.create_video("The Thing", "1982-06-25", 1).await;

    let natural = app.request("GET", "/videos", None).await;
    let ids: Vec<i64> = natural.body.as_array().unwrap().iter().map(|v| v["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [matrix, alien, thing]);

    let asc = app.request("GET", "/videos?sort=asc", None).await;
    assert_eq!(asc.body[0]["title"], "Alien");
    assert_eq!(asc.body[2]["title"], "The Thing");

    let filtered = app.request("GET", "/videos?title=The&sort=desc", None).await;
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.body[0]["title"], "The Thing");
    assert_eq!(filtered.body[1]["title"], "The Matrix");

    let by_date = app
        .request("GET", "/videos?order_by=-release_date", None)
        .await;
    assert_eq!(by_date.body[0]["id"], matrix);
    assert_eq!(by_date.body[2]["id"], alien);

    let bad = app.request("GET", "/videos?order_by=rating", None).await;
    bad.assert_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Unknown sort field 'rating'");

    let bad_dir = app.request("GET", "/videos?sort=sideways", None).await;
    assert_eq!(bad_dir.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_is_partial_and_requires_title() {
    let app = TestApp::new();
    let id = app.create_video("Heat", "1995-12-15", 2).await;

    let updated = app
        .request("PUT", &format!("/videos/{id}"), Some(json!({"title": "Heat (Director's Cut)", "total_inventory": 4})))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Heat (Director's Cut)");
    assert_eq!(updated.body["release_date"], "1995-12-15");
    assert_eq!(updated.body["total_inventory"], 4);

    app.request("PUT", &format!("/videos/{id}"), Some(json!({"total_inventory": 1})))
        .await
        .assert_error(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Request body must include title.",
        );

    app.request("PUT", "/videos/77", Some(json!({"title": "Ghost"})))
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Video 77 was not found");
}

#[tokio::test]
async fn test_inventory_cannot_shrink_below_checked_out() {
    let app = TestApp::new();
    let video = app.create_video("Heat", "1995-12-15", 2).await;
    let customer = app.create_customer("Neil", "90210", "555-0101").await;
    app.check_out(customer, video).await;
    app.check_out(customer, video).await;

    let response = app
        .request("PUT", &format!("/videos/{video}"), Some(json!({"title": "Heat", "total_inventory": 1})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_STATE");

    let inventory = app.request("GET", &format!("/videos/{video}/inventory"), None).await;
    assert_eq!(
        inventory.body,
        json!({"video_id": video, "total_inventory": 2, "videos_checked_out_count": 2, "available_inventory": 0})
    );
}

#[tokio::test]
async fn test_delete_returns_record_and_is_blocked_by_active_rentals() {
    let app = TestApp::new();
    let video = app.create_video("Heat", "1995-12-15", 1).await;
    let customer = app.create_customer("Neil", "90210", "555-0101").await;
    app.check_out(customer, video).await;

    let blocked = app.request("DELETE", &format!("/videos/{video}"), None).await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.body["error"], "INVALID_STATE");

    app.check_in(customer, video).await;
    let deleted = app.request("DELETE", &format!("/videos/{video}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["title"], "Heat");

    let gone = app.request("GET", &format!("/videos/{video}"), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let history = app.request("GET", &format!("/customers/{customer}/rentals"), None).await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.len(), 0);
}

#[tokio::test]
async fn test_current_renters_of_a_video() {
    let app = TestApp::new();
    let video = app.create_video("Heat", "1995-12-15", 3).await;
    let neil = app.create_customer("Neil", "90210", "555-0101").await;
    let vincent = app.create_customer("Vincent", "90028", "555-0102").await;

    app.check_out(neil, video).await;
    app.clock.advance(chrono::Duration::days(1));
    app.check_out(vincent, video).await;

    let renters = app.request("GET", &format!("/videos/{video}/rentals"), None).await;
    assert_eq!(renters.status, StatusCode::OK);
    assert_eq!(renters.len(), 2);
    assert_eq!(renters.body[0]["name"], "Neil");
    assert_eq!(renters.body[0]["phone"], "555-0101");
    assert_eq!(renters.body[0]["postal_code"], "90210");
    assert_eq!(renters.body[1]["name"], "Vincent");

    app.request("GET", "/videos/55/rentals", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Video 55 was not found");
}
