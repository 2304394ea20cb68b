//! PostgreSQL repositories.
//!
//! Writes that depend on the active rental count take the video row with
//! `FOR UPDATE` first, so all checkouts, check-ins, resizes and deletes of
//! one video run one after another. Checkouts take the customer row
//! `FOR SHARE`; customer deletion takes it `FOR UPDATE`. Locks are always
//! taken video first, then customer.

pub mod customer;
pub mod rental;
pub mod video;

pub use customer::CustomerRepository;
pub use rental::RentalRepository;
pub use video::VideoRepository;

use sqlx::PgConnection;

use rentalhub_core::error::{AppError, ErrorKind};
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerId, VideoId};
use rentalhub_entity::{Customer, Video};

/// Fetch and lock a video row for the rest of the transaction.
pub(crate) async fn lock_video(conn: &mut PgConnection, id: VideoId) -> AppResult<Option<Video>> {
    sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock video", e))
}

/// Fetch a customer row, locking it against deletion.
pub(crate) async fn lock_customer(
    conn: &mut PgConnection,
    id: CustomerId,
    exclusive: bool,
) -> AppResult<Option<Customer>> {
    let sql = if exclusive {
        "SELECT * FROM customers WHERE id = $1 FOR UPDATE"
    } else {
        "SELECT * FROM customers WHERE id = $1 FOR SHARE"
    };
    sqlx::query_as::<_, Customer>(sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock customer", e))
}

/// Number of copies of a video currently out.
pub(crate) async fn count_active_for_video(conn: &mut PgConnection, id: VideoId) -> AppResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE video_id = $1 AND checked_out")
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count active rentals", e)
        })
}

/// Number of copies a customer currently holds.
pub(crate) async fn count_active_for_customer(
    conn: &mut PgConnection,
    id: CustomerId,
) -> AppResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE customer_id = $1 AND checked_out")
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count active rentals", e)
        })
}

pub(crate) fn begin_failed(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
}

pub(crate) fn commit_failed(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
}
