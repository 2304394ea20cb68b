//! Video catalog handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use rentalhub_core::types::VideoId;
use rentalhub_entity::{CustomerRental, InventoryStatus, Video};

use crate::dto::request::{CreateVideoRequest, UpdateVideoRequest};
use crate::error::ApiResult;
use crate::extractors::{IdPath, ListQuery, ValidatedJson, VideoListParams};
use crate::state::AppState;

/// GET /videos?title=&sort=&order_by=
pub async fn list_videos(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<VideoListParams>,
) -> ApiResult<Json<Vec<Video>>> {
    let sort = params.sort_spec()?;
    let videos = state.video_service.list(&params.filter(), &sort).await?;
    Ok(Json(videos))
}

/// GET /videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    IdPath(id): IdPath<VideoId>,
) -> ApiResult<Json<Video>> {
    Ok(Json(state.video_service.get(id).await?))
}

/// POST /videos
pub async fn create_video(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateVideoRequest>,
) -> ApiResult<(StatusCode, Json<Video>)> {
    let video = state.video_service.create(req.into_new_video()?).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /videos/{id}
pub async fn update_video(
    State(state): State<AppState>,
    IdPath(id): IdPath<VideoId>,
    ValidatedJson(req): ValidatedJson<UpdateVideoRequest>,
) -> ApiResult<Json<Video>> {
    let video = state.video_service.update(id, req.into_update()?).await?;
    Ok(Json(video))
}

/// DELETE /videos/{id}
pub async fn delete_video(
    State(state): State<AppState>,
    IdPath(id): IdPath<VideoId>,
) -> ApiResult<Json<Video>> {
    Ok(Json(state.video_service.delete(id).await?))
}

/// GET /videos/{id}/rentals
pub async fn list_video_rentals(
    State(state): State<AppState>,
    IdPath(id): IdPath<VideoId>,
) -> ApiResult<Json<Vec<CustomerRental>>> {
    Ok(Json(state.rental_service.customers_holding(id).await?))
}

/// GET /videos/{id}/inventory
pub async fn get_inventory(
    State(state): State<AppState>,
    IdPath(id): IdPath<VideoId>,
) -> ApiResult<Json<InventoryStatus>> {
    Ok(Json(state.rental_service.inventory(id).await?))
}
