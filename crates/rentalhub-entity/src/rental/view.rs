//! Joined rental rows returned by the query layer.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

use rentalhub_core::types::{CustomerId, RentalId, SortKey, VideoId};

/// A customer currently holding a given video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CustomerRental {
    /// Customer name.
    pub name: String,
    /// Customer phone.
    pub phone: String,
    /// Customer postal code.
    pub postal_code: String,
    /// When the copy is due.
    pub due_date: DateTime<Utc>,
}

/// A video currently held by a given customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct VideoRental {
    /// Video title.
    pub title: String,
    /// Video release date.
    pub release_date: NaiveDate,
    /// When the copy is due.
    pub due_date: DateTime<Utc>,
}

/// An open rental past its due date, flattened with customer and video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct OverdueRental {
    /// Rental row, kept for stable ordering.
    #[serde(skip_serializing)]
    pub rental_id: RentalId,
    /// Video.
    pub video_id: VideoId,
    /// Video title.
    pub title: String,
    /// Customer.
    pub customer_id: CustomerId,
    /// Customer name.
    pub name: String,
    /// Customer postal code.
    pub postal_code: String,
    /// When the copy was due.
    pub due_date: DateTime<Utc>,
}

/// Columns the overdue listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverdueSortKey {
    /// Rental primary key.
    RentalId,
    /// Due date.
    DueDate,
    /// Customer name.
    Name,
    /// Video title.
    Title,
    /// Customer postal code.
    PostalCode,
    /// Customer id.
    CustomerId,
    /// Video id.
    VideoId,
}

impl SortKey for OverdueSortKey {
    const TIE_BREAKER: Self = Self::RentalId;

    fn default_keys() -> &'static [Self] {
        &[Self::DueDate]
    }

    fn natural_keys() -> &'static [Self] {
        &[Self::DueDate]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "due_date" => Some(Self::DueDate),
            "name" => Some(Self::Name),
            "title" => Some(Self::Title),
            "postal_code" => Some(Self::PostalCode),
            "customer_id" => Some(Self::CustomerId),
            "video_id" => Some(Self::VideoId),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::RentalId => "rental_id",
            Self::DueDate => "due_date",
            Self::Name => "name",
            Self::Title => "title",
            Self::PostalCode => "postal_code",
            Self::CustomerId => "customer_id",
            Self::VideoId => "video_id",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::RentalId => "r.id",
            Self::DueDate => "r.due_date",
            Self::Name => "c.name",
            Self::Title => "v.title",
            Self::PostalCode => "c.postal_code",
            Self::CustomerId => "r.customer_id",
            Self::VideoId => "r.video_id",
        }
    }
}

impl OverdueSortKey {
    /// Ascending comparison of two overdue rows on this key.
    pub fn compare(self, a: &OverdueRental, b: &OverdueRental) -> Ordering {
        match self {
            Self::RentalId => a.rental_id.cmp(&b.rental_id),
            Self::DueDate => a.due_date.cmp(&b.due_date),
            Self::Name => a.name.cmp(&b.name),
            Self::Title => a.title.cmp(&b.title),
            Self::PostalCode => a.postal_code.cmp(&b.postal_code),
            Self::CustomerId => a.customer_id.cmp(&b.customer_id),
            Self::VideoId => a.video_id.cmp(&b.video_id),
        }
    }
}
