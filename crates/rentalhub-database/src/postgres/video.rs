//! Video repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use rentalhub_core::error::{AppError, ErrorKind};
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{SortSpec, VideoFilter, VideoId};
use rentalhub_entity::{InventoryStatus, NewVideo, UpdateVideo, Video, VideoSortKey};

use super::{begin_failed, commit_failed, count_active_for_video, lock_video};
use crate::store::VideoStore;

/// Repository for the `videos` table.
#[derive(Debug, Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    /// Create a new video repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }

    async fn find_all(
        &self,
        filter: &VideoFilter,
        sort: &SortSpec<VideoSortKey>,
    ) -> AppResult<Vec<Video>> {
        let sql = format!(
            "SELECT * FROM videos WHERE ($1::TEXT IS NULL OR strpos(title, $1) > 0) ORDER BY {}",
            sort.to_sql()
        );
        sqlx::query_as::<_, Video>(&sql)
            .bind(filter.title.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list videos", e))
    }

    async fn create(&self, data: &NewVideo) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos (title, release_date, total_inventory) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.title)
        .bind(data.release_date)
        .bind(data.total_inventory)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create video", e))
    }

    async fn update(&self, id: VideoId, data: &UpdateVideo) -> AppResult<Option<Video>> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let Some(mut video) = lock_video(&mut tx, id).await? else {
            return Ok(None);
        };
        if let Some(total) = data.total_inventory {
            let active = count_active_for_video(&mut tx, id).await?;
            InventoryStatus::new(id, video.total_inventory, active).ensure_can_resize(total)?;
        }
        video.apply(data);

        let updated = sqlx::query_as::<_, Video>(
            "UPDATE videos SET title = $2, release_date = $3, total_inventory = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&video.title)
        .bind(video.release_date)
        .bind(video.total_inventory)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update video", e))?;

        tx.commit().await.map_err(commit_failed)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: VideoId) -> AppResult<Option<Video>> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let Some(video) = lock_video(&mut tx, id).await? else {
            return Ok(None);
        };
        let active = count_active_for_video(&mut tx, id).await?;
        if active > 0 {
            return Err(AppError::state(format!(
                "Video {id} has {active} copies checked out"
            )));
        }

        sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete video", e))?;

        tx.commit().await.map_err(commit_failed)?;
        Ok(Some(video))
    }
}
