//! Sortable video columns.

use std::cmp::Ordering;

use rentalhub_core::types::SortKey;

use super::model::Video;

/// Columns a video listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSortKey {
    /// Primary key.
    Id,
    /// Title.
    Title,
    /// Release date.
    ReleaseDate,
    /// Copies owned.
    TotalInventory,
}

impl SortKey for VideoSortKey {
    const TIE_BREAKER: Self = Self::Id;

    fn default_keys() -> &'static [Self] {
        &[Self::Title, Self::Id]
    }

    fn natural_keys() -> &'static [Self] {
        &[Self::Id]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "release_date" => Some(Self::ReleaseDate),
            "total_inventory" => Some(Self::TotalInventory),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::ReleaseDate => "release_date",
            Self::TotalInventory => "total_inventory",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::ReleaseDate => "release_date",
            Self::TotalInventory => "total_inventory",
        }
    }
}

impl VideoSortKey {
    /// Ascending comparison of two videos on this key.
    pub fn compare(self, a: &Video, b: &Video) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.cmp(&b.title),
            Self::ReleaseDate => a.release_date.cmp(&b.release_date),
            Self::TotalInventory => a.total_inventory.cmp(&b.total_inventory),
        }
    }
}
