//! Inventory arithmetic shared by every store backend.
//!
//! A video's copies are either on the shelf or held by an active rental.
//! Stores compute the active count inside their per-video serialization
//! point and hand it to [`InventoryStatus`], which owns the capacity rule.

use serde::{Deserialize, Serialize};

use rentalhub_core::error::AppError;
use rentalhub_core::result::AppResult;
use rentalhub_core::types::VideoId;

/// Checked-out and available counts for one video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStatus {
    /// The video.
    pub video_id: VideoId,
    /// Copies owned.
    pub total_inventory: i64,
    /// Active rentals.
    pub videos_checked_out_count: i64,
    /// Copies on the shelf.
    pub available_inventory: i64,
}

impl InventoryStatus {
    /// Derive the status from the copy count and the active rental count.
    pub fn new(video_id: VideoId, total_inventory: i32, active_count: i64) -> Self {
        let total_inventory = i64::from(total_inventory);
        Self {
            video_id,
            total_inventory,
            videos_checked_out_count: active_count,
            available_inventory: total_inventory - active_count,
        }
    }

    /// Whether one more copy can go out. A count already above capacity
    /// still blocks.
    pub fn has_available_copy(&self) -> bool {
        self.videos_checked_out_count < self.total_inventory
    }

    /// Fail with a capacity error when no copy is on the shelf.
    pub fn ensure_available(&self) -> AppResult<()> {
        if self.has_available_copy() {
            Ok(())
        } else {
            Err(AppError::capacity("Could not perform checkout"))
        }
    }

    /// Fail with a state error when `new_total` would leave more copies
    /// rented than owned.
    pub fn ensure_can_resize(&self, new_total: i32) -> AppResult<()> {
        if i64::from(new_total) < self.videos_checked_out_count {
            return Err(AppError::state(format!(
                "Video {} has {} copies checked out; total_inventory cannot drop to {}",
                self.video_id, self.videos_checked_out_count, new_total
            )));
        }
        Ok(())
    }
}
