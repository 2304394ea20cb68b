//! Health check handler.

use axum::Json;
use axum::extract::State;

use rentalhub_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /health
///
/// 200 while the store answers, 503 `SERVICE_UNAVAILABLE` otherwise.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let provider = state.store.provider();
    let healthy = state.store.health_check().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Store health check failed");
        false
    });
    if !healthy {
        let message = format!("The {provider} store is not reachable");
        return Err(AppError::service_unavailable(message).into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        store: provider.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
