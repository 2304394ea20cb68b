use async_trait::async_trait;

use rentalhub_core::error::AppError;
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{SortSpec, VideoFilter, VideoId};
use rentalhub_entity::{NewVideo, UpdateVideo, Video, VideoSortKey};

use super::MemoryStore;
use crate::store::VideoStore;

#[async_trait]
impl VideoStore for MemoryStore {
    async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>> {
        Ok(self.tables.read().await.videos.get(&id).cloned())
    }

    async fn find_all(
        &self,
        filter: &VideoFilter,
        sort: &SortSpec<VideoSortKey>,
    ) -> AppResult<Vec<Video>> {
        let tables = self.tables.read().await;
        let mut videos: Vec<Video> = tables
            .videos
            .values()
            .filter(|v| filter.matches(&v.title))
            .cloned()
            .collect();
        sort.sort(&mut videos, |a, b, key| key.compare(a, b));
        Ok(videos)
    }

    async fn create(&self, data: &NewVideo) -> AppResult<Video> {
        let mut tables = self.tables.write().await;
        let video = data.clone().into_video(tables.next_video_id());
        tables.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn update(&self, id: VideoId, data: &UpdateVideo) -> AppResult<Option<Video>> {
        let mut tables = self.tables.write().await;
        let Some(status) = tables.inventory(id) else {
            return Ok(None);
        };
        if let Some(total) = data.total_inventory {
            status.ensure_can_resize(total)?;
        }
        Ok(tables.videos.get_mut(&id).map(|video| {
            video.apply(data);
            video.clone()
        }))
    }

    async fn delete(&self, id: VideoId) -> AppResult<Option<Video>> {
        let mut tables = self.tables.write().await;
        if !tables.videos.contains_key(&id) {
            return Ok(None);
        }
        let active = tables.active_count_for_video(id);
        if active > 0 {
            return Err(AppError::state(format!(
                "Video {id} has {active} copies checked out"
            )));
        }
        tables.rentals.retain(|_, r| r.video_id != id);
        Ok(tables.videos.remove(&id))
    }
}
