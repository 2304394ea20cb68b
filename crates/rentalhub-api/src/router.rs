//! Route definitions for the RentalHub HTTP API.
//!
//! Routes are grouped by domain. The router receives `AppState` and passes
//! it to all handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(video_routes())
        .merge(customer_routes())
        .merge(rental_routes())
        .route("/health", get(handlers::health::health))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Video catalog and per-video rental views
fn video_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/videos",
            get(handlers::video::list_videos).post(handlers::video::create_video),
        )
        .route(
            "/videos/{id}",
            get(handlers::video::get_video)
                .put(handlers::video::update_video)
                .delete(handlers::video::delete_video),
        )
        .route(
            "/videos/{id}/rentals",
            get(handlers::video::list_video_rentals),
        )
        .route("/videos/{id}/inventory", get(handlers::video::get_inventory))
}

/// Customer directory and per-customer rental views
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(handlers::customer::list_customers).post(handlers::customer::create_customer),
        )
        .route(
            "/customers/{id}",
            get(handlers::customer::get_customer)
                .put(handlers::customer::update_customer)
                .delete(handlers::customer::delete_customer),
        )
        .route(
            "/customers/{id}/rentals",
            get(handlers::customer::list_customer_rentals),
        )
}

/// Checkout, check-in and overdue listing
fn rental_routes() -> Router<AppState> {
    Router::new()
        .route("/rentals/check-out", post(handlers::rental::check_out))
        .route("/rentals/check-in", post(handlers::rental::check_in))
        .route("/rentals/overdue", get(handlers::rental::list_overdue))
}
