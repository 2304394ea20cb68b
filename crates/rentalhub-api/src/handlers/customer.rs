//! Customer directory handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use rentalhub_core::types::CustomerId;
use rentalhub_entity::{Customer, VideoRental};

use crate::dto::request::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::error::ApiResult;
use crate::extractors::{CustomerListParams, IdPath, ListQuery, ValidatedJson};
use crate::state::AppState;

/// GET /customers?name=&postal_code=&sort=&order_by=
pub async fn list_customers(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<CustomerListParams>,
) -> ApiResult<Json<Vec<Customer>>> {
    let sort = params.sort_spec()?;
    let customers = state.customer_service.list(&params.filter(), &sort).await?;
    Ok(Json(customers))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    IdPath(id): IdPath<CustomerId>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.customer_service.get(id).await?))
}

/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCustomerRequest>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let customer = state
        .customer_service
        .create(req.into_new_customer()?)
        .await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    IdPath(id): IdPath<CustomerId>,
    ValidatedJson(req): ValidatedJson<UpdateCustomerRequest>,
) -> ApiResult<Json<Customer>> {
    let customer = state
        .customer_service
        .update(id, req.into_update()?)
        .await?;
    Ok(Json(customer))
}

/// DELETE /customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    IdPath(id): IdPath<CustomerId>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.customer_service.delete(id).await?))
}

/// GET /customers/{id}/rentals
pub async fn list_customer_rentals(
    State(state): State<AppState>,
    IdPath(id): IdPath<CustomerId>,
) -> ApiResult<Json<Vec<VideoRental>>> {
    Ok(Json(state.rental_service.videos_held_by(id).await?))
}
