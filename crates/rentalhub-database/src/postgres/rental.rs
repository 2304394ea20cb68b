//! Rental repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use rentalhub_core::error::{AppError, ErrorKind};
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerId, SortSpec, VideoId};
use rentalhub_entity::{
    Customer, CustomerRental, InventoryStatus, OverdueRental, OverdueSortKey, Rental,
    RentalReceipt, Video, VideoRental,
};

use super::{begin_failed, commit_failed, count_active_for_video, lock_customer, lock_video};
use crate::store::RentalStore;

/// Repository for the `rentals` table and its joins.
#[derive(Debug, Clone)]
pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    /// Create a new rental repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalStore for RentalRepository {
    async fn check_out(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
        checked_out_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<RentalReceipt> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let video = lock_video(&mut tx, video_id)
            .await?
            .ok_or_else(|| Video::not_found(video_id))?;
        lock_customer(&mut tx, customer_id, false)
            .await?
            .ok_or_else(|| Customer::not_found(customer_id))?;

        let active = count_active_for_video(&mut tx, video_id).await?;
        InventoryStatus::new(video_id, video.total_inventory, active).ensure_available()?;

        let rental = sqlx::query_as::<_, Rental>(
            "INSERT INTO rentals (customer_id, video_id, due_date, checked_out, checked_out_at) \
             VALUES ($1, $2, $3, TRUE, $4) RETURNING *",
        )
        .bind(customer_id)
        .bind(video_id)
        .bind(due_date)
        .bind(checked_out_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert rental", e))?;

        let status = InventoryStatus::new(video_id, video.total_inventory, active + 1);
        tx.commit().await.map_err(commit_failed)?;

        debug!(rental_id = %rental.id, "Inserted rental");
        Ok(RentalReceipt::new(&rental, &status))
    }

    async fn check_in(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
        checked_in_at: DateTime<Utc>,
    ) -> AppResult<RentalReceipt> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let video = lock_video(&mut tx, video_id)
            .await?
            .ok_or_else(|| Video::not_found(video_id))?;
        lock_customer(&mut tx, customer_id, false)
            .await?
            .ok_or_else(|| Customer::not_found(customer_id))?;

        let rental = sqlx::query_as::<_, Rental>(
            "UPDATE rentals SET checked_out = FALSE, checked_in_at = $3 \
             WHERE id = ( \
                SELECT id FROM rentals \
                WHERE customer_id = $1 AND video_id = $2 AND checked_out \
                ORDER BY checked_out_at ASC, id ASC LIMIT 1 \
             ) RETURNING *",
        )
        .bind(customer_id)
        .bind(video_id)
        .bind(checked_in_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to close rental", e))?
        .ok_or_else(|| Rental::none_outstanding(customer_id, video_id))?;

        let active = count_active_for_video(&mut tx, video_id).await?;
        tx.commit().await.map_err(commit_failed)?;

        debug!(rental_id = %rental.id, "Closed rental");
        let status = InventoryStatus::new(video_id, video.total_inventory, active);
        Ok(RentalReceipt::new(&rental, &status))
    }

    async fn inventory(&self, video_id: VideoId) -> AppResult<Option<InventoryStatus>> {
        let row: Option<(i32, i64)> = sqlx::query_as(
            "SELECT v.total_inventory, \
                (SELECT COUNT(*) FROM rentals r WHERE r.video_id = v.id AND r.checked_out) \
             FROM videos v WHERE v.id = $1",
        )
        .bind(video_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read inventory", e))?;

        Ok(row.map(|(total, active)| InventoryStatus::new(video_id, total, active)))
    }

    async fn find_active_by_video(&self, video_id: VideoId) -> AppResult<Vec<CustomerRental>> {
        sqlx::query_as::<_, CustomerRental>(
            "SELECT c.name, c.phone, c.postal_code, r.due_date \
             FROM rentals r INNER JOIN customers c ON c.id = r.customer_id \
             WHERE r.video_id = $1 AND r.checked_out \
             ORDER BY r.due_date ASC, r.id ASC",
        )
        .bind(video_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list current renters", e)
        })
    }

    async fn find_active_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> AppResult<Vec<VideoRental>> {
        sqlx::query_as::<_, VideoRental>(
            "SELECT v.title, v.release_date, r.due_date \
             FROM rentals r INNER JOIN videos v ON v.id = r.video_id \
             WHERE r.customer_id = $1 AND r.checked_out \
             ORDER BY r.due_date ASC, r.id ASC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list rented videos", e)
        })
    }

    async fn find_overdue(
        &self,
        as_of: DateTime<Utc>,
        sort: &SortSpec<OverdueSortKey>,
    ) -> AppResult<Vec<OverdueRental>> {
        let sql = format!(
            "SELECT r.id AS rental_id, r.video_id, v.title, r.customer_id, c.name, \
                c.postal_code, r.due_date \
             FROM rentals r \
             INNER JOIN videos v ON v.id = r.video_id \
             INNER JOIN customers c ON c.id = r.customer_id \
             WHERE r.checked_out AND r.due_date < $1 \
             ORDER BY {}",
            sort.to_sql()
        );
        sqlx::query_as::<_, OverdueRental>(&sql)
            .bind(as_of)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list overdue rentals", e)
            })
    }
}
