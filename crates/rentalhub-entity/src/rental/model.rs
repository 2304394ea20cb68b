//! Rental entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentalhub_core::error::AppError;
use rentalhub_core::types::{CustomerId, RentalId, VideoId};

/// One checkout of one copy. The row outlives the check-in and stays as
/// rental history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Rental {
    /// Unique rental identifier.
    pub id: RentalId,
    /// Customer holding the copy.
    pub customer_id: CustomerId,
    /// Video rented.
    pub video_id: VideoId,
    /// When the copy has to be back.
    pub due_date: DateTime<Utc>,
    /// Whether the copy is still out.
    pub checked_out: bool,
    /// When the copy went out.
    pub checked_out_at: DateTime<Utc>,
    /// When the copy came back (None while still out).
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Rental {
    /// The error returned by a check-in that matches no open rental.
    pub fn none_outstanding(customer_id: CustomerId, video_id: VideoId) -> AppError {
        AppError::state(format!(
            "No outstanding rentals for customer {customer_id} and video {video_id}"
        ))
    }

    /// Whether the rental is still open and past its due date at `as_of`.
    /// A rental due exactly at `as_of` is not yet overdue.
    pub fn is_overdue_at(&self, as_of: DateTime<Utc>) -> bool {
        self.checked_out && self.due_date < as_of
    }

    /// Close the rental.
    pub fn check_in(&mut self, at: DateTime<Utc>) {
        self.checked_out = false;
        self.checked_in_at = Some(at);
    }
}
