//! Video entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentalhub_core::error::AppError;
use rentalhub_core::types::VideoId;

/// A video title and how many physical copies the store owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Video {
    /// Unique video identifier.
    pub id: VideoId,
    /// Title.
    pub title: String,
    /// Release date.
    pub release_date: NaiveDate,
    /// Copies owned. Never below the number of active rentals.
    pub total_inventory: i32,
}

impl Video {
    /// The error returned when `id` does not resolve to a video.
    pub fn not_found(id: VideoId) -> AppError {
        AppError::not_found(format!("Video {id} was not found"))
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, update: &UpdateVideo) {
        self.title.clone_from(&update.title);
        if let Some(release_date) = update.release_date {
            self.release_date = release_date;
        }
        if let Some(total_inventory) = update.total_inventory {
            self.total_inventory = total_inventory;
        }
    }
}

/// Data required to create a new video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVideo {
    /// Title.
    pub title: String,
    /// Release date.
    pub release_date: NaiveDate,
    /// Copies owned.
    pub total_inventory: i32,
}

impl NewVideo {
    /// Materialize the record under an assigned id.
    pub fn into_video(self, id: VideoId) -> Video {
        Video {
            id,
            title: self.title,
            release_date: self.release_date,
            total_inventory: self.total_inventory,
        }
    }
}

/// Partial update of a video. The title is always replaced; the other
/// fields only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVideo {
    /// New title.
    pub title: String,
    /// New release date.
    pub release_date: Option<NaiveDate>,
    /// New copy count.
    pub total_inventory: Option<i32>,
}
