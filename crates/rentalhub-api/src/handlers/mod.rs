//! HTTP request handlers.

pub mod customer;
pub mod health;
pub mod rental;
pub mod video;

use axum::http::Uri;

use rentalhub_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("No route for {}", uri.path())).into()
}
