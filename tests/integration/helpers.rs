//! Shared test helpers for integration tests.
//!
//! Every `TestApp` runs against its own in-memory store and a clock frozen
//! at [`start_time`], so tests need no database and can move time freely.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use rentalhub_api::{AppState, build_app};
use rentalhub_core::config::{AppConfig, DatabaseConfig};
use rentalhub_core::traits::FixedClock;
use rentalhub_database::{MemoryStore, StoreManager};

/// The instant every test clock starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock driving due dates and the overdue cut-off
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig::memory(),
            ..AppConfig::default()
        };
        let clock = Arc::new(FixedClock::new(start_time()));
        let store = StoreManager::memory(MemoryStore::new());
        let state = AppState::new(config, store, clock.clone());

        Self {
            router: build_app(state),
            clock,
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str).await
    }

    /// Make a request with a raw body, which need not be valid JSON
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a video and return its id
    pub async fn create_video(&self, title: &str, release_date: &str, total_inventory: i64) -> i64 {
        let response = self
            .request(
                "POST",
                "/videos",
                Some(json!({
                    "title": title,
                    "release_date": release_date,
                    "total_inventory": total_inventory,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Create a customer and return their id
    pub async fn create_customer(&self, name: &str, postal_code: &str, phone: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/customers",
                Some(json!({
                    "name": name,
                    "postal_code": postal_code,
                    "phone": phone,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// POST /rentals/check-out
    pub async fn check_out(&self, customer_id: i64, video_id: i64) -> TestResponse {
        self.request(
            "POST",
            "/rentals/check-out",
            Some(json!({ "customer_id": customer_id, "video_id": video_id })),
        )
        .await
    }

    /// POST /rentals/check-in
    pub async fn check_in(&self, customer_id: i64, video_id: i64) -> TestResponse {
        self.request(
            "POST",
            "/rentals/check-in",
            Some(json!({ "customer_id": customer_id, "video_id": video_id })),
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` field of a record body
    pub fn id(&self) -> i64 {
        self.body["id"].as_i64().expect("No id in response body")
    }

    /// Assert an error response with the given status, code and message
    pub fn assert_error(&self, status: StatusCode, code: &str, message: &str) {
        assert_eq!(self.status, status, "{:?}", self.body);
        assert_eq!(self.body["error"], code);
        assert_eq!(self.body["message"], message);
    }

    /// Number of elements in an array body
    pub fn len(&self) -> usize {
        self.body.as_array().map_or(0, Vec::len)
    }
}
