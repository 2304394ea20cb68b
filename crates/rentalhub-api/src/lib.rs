//! # rentalhub-api
//!
//! HTTP API layer for RentalHub built on Axum.
//!
//! Provides the REST endpoints for videos, customers and rentals, the
//! middleware stack (CORS, compression, request logging), extractors that
//! turn malformed input into validation errors, DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
