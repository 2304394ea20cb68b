//! Checkout, check-in and overdue handlers.

use axum::Json;
use axum::extract::State;

use rentalhub_entity::{OverdueRental, RentalReceipt};

use crate::dto::request::RentalRequest;
use crate::error::ApiResult;
use crate::extractors::{ListQuery, OverdueParams, ValidatedJson};
use crate::state::AppState;

/// POST /rentals/check-out
pub async fn check_out(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RentalRequest>,
) -> ApiResult<Json<RentalReceipt>> {
    let (customer_id, video_id) = req.ids()?;
    Ok(Json(
        state.rental_service.check_out(customer_id, video_id).await?,
    ))
}

/// POST /rentals/check-in
pub async fn check_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RentalRequest>,
) -> ApiResult<Json<RentalReceipt>> {
    let (customer_id, video_id) = req.ids()?;
    Ok(Json(state.rental_service.check_in(customer_id, video_id).await?))
}

/// GET /rentals/overdue?as_of=&sort=&order_by=
pub async fn list_overdue(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<OverdueParams>,
) -> ApiResult<Json<Vec<OverdueRental>>> {
    let as_of = params.as_of()?;
    let sort = params.sort_spec()?;
    Ok(Json(state.rental_service.overdue(as_of, &sort).await?))
}
