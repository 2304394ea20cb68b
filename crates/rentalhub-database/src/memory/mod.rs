//! In-process store backend.
//!
//! All three tables live behind one `tokio::sync::RwLock`. Every write
//! takes the write half for its whole duration, which gives each checkout,
//! check-in, resize and delete the same atomicity the PostgreSQL backend
//! gets from row locks. Nothing is persisted.

mod customer;
mod rental;
mod video;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use rentalhub_core::types::{CustomerId, RentalId, VideoId};
use rentalhub_entity::{Customer, InventoryStatus, Rental, Video};

/// Store backed by process-local tables. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
struct Tables {
    videos: BTreeMap<VideoId, Video>,
    customers: BTreeMap<CustomerId, Customer>,
    rentals: BTreeMap<RentalId, Rental>,
    video_seq: i64,
    customer_seq: i64,
    rental_seq: i64,
}

impl Tables {
    fn next_video_id(&mut self) -> VideoId {
        self.video_seq += 1;
        VideoId(self.video_seq)
    }

    fn next_customer_id(&mut self) -> CustomerId {
        self.customer_seq += 1;
        CustomerId(self.customer_seq)
    }

    fn next_rental_id(&mut self) -> RentalId {
        self.rental_seq += 1;
        RentalId(self.rental_seq)
    }

    fn active_rentals(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.values().filter(|r| r.checked_out)
    }

    fn active_count_for_video(&self, id: VideoId) -> i64 {
        self.active_rentals().filter(|r| r.video_id == id).count() as i64
    }

    fn active_count_for_customer(&self, id: CustomerId) -> i64 {
        self.active_rentals().filter(|r| r.customer_id == id).count() as i64
    }

    fn inventory(&self, id: VideoId) -> Option<InventoryStatus> {
        self.videos.get(&id).map(|video| {
            InventoryStatus::new(id, video.total_inventory, self.active_count_for_video(id))
        })
    }
}
