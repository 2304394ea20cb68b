//! Video CRUD operations.

use std::sync::Arc;

use tracing::info;

use rentalhub_core::error::AppError;
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{SortSpec, VideoFilter, VideoId};
use rentalhub_database::VideoStore;
use rentalhub_entity::{NewVideo, UpdateVideo, Video, VideoSortKey};

/// Handles the video catalog.
#[derive(Debug, Clone)]
pub struct VideoService {
    /// Video store.
    videos: Arc<dyn VideoStore>,
}

impl VideoService {
    /// Creates a new video service.
    pub fn new(videos: Arc<dyn VideoStore>) -> Self {
        Self { videos }
    }

    /// Lists videos matching `filter` in `sort` order.
    pub async fn list(
        &self,
        filter: &VideoFilter,
        sort: &SortSpec<VideoSortKey>,
    ) -> AppResult<Vec<Video>> {
        self.videos.find_all(filter, sort).await
    }

    /// Fetches one video.
    pub async fn get(&self, id: VideoId) -> AppResult<Video> {
        self.videos
            .find_by_id(id)
            .await?
            .ok_or_else(|| Video::not_found(id))
    }

    /// Adds a video to the catalog.
    pub async fn create(&self, data: NewVideo) -> AppResult<Video> {
        ensure_inventory_not_negative(data.total_inventory)?;

        let video = self.videos.create(&data).await?;
        info!(
            video_id = %video.id,
            total_inventory = video.total_inventory,
            "Video created"
        );
        Ok(video)
    }

    /// Applies a partial update.
    pub async fn update(&self, id: VideoId, data: UpdateVideo) -> AppResult<Video> {
        if let Some(total) = data.total_inventory {
            ensure_inventory_not_negative(total)?;
        }

        let video = self
            .videos
            .update(id, &data)
            .await?
            .ok_or_else(|| Video::not_found(id))?;
        info!(video_id = %id, "Video updated");
        Ok(video)
    }

    /// Removes a video and its rental history, returning the removed record.
    pub async fn delete(&self, id: VideoId) -> AppResult<Video> {
        let video = self
            .videos
            .delete(id)
            .await?
            .ok_or_else(|| Video::not_found(id))?;
        info!(video_id = %id, "Video deleted");
        Ok(video)
    }
}

fn ensure_inventory_not_negative(total: i32) -> AppResult<()> {
    if total < 0 {
        return Err(AppError::validation(
            "total_inventory must be zero or greater",
        ));
    }
    Ok(())
}
