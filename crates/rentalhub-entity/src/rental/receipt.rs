//! Checkout/check-in receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentalhub_core::types::{CustomerId, VideoId};

use super::model::Rental;
use crate::inventory::InventoryStatus;

/// Summary returned by checkout and check-in: the rental touched and the
/// video's inventory right after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalReceipt {
    /// Customer.
    pub customer_id: CustomerId,
    /// Video.
    pub video_id: VideoId,
    /// Due date of the rental.
    pub due_date: DateTime<Utc>,
    /// Active rentals of the video after the change.
    pub videos_checked_out_count: i64,
    /// Copies on the shelf after the change.
    pub available_inventory: i64,
}

impl RentalReceipt {
    /// Build a receipt for `rental` from the post-change inventory.
    pub fn new(rental: &Rental, inventory: &InventoryStatus) -> Self {
        Self {
            customer_id: rental.customer_id,
            video_id: rental.video_id,
            due_date: rental.due_date,
            videos_checked_out_count: inventory.videos_checked_out_count,
            available_inventory: inventory.available_inventory,
        }
    }
}
