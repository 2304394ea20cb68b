//! Store traits implemented by every backend.
//!
//! Each mutating operation that touches inventory runs as one atomic unit
//! inside the backend. Callers never see a half-applied checkout, check-in,
//! resize or delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerFilter, CustomerId, SortSpec, VideoFilter, VideoId};
use rentalhub_entity::{
    Customer, CustomerRental, CustomerSortKey, InventoryStatus, NewCustomer, NewVideo,
    OverdueRental, OverdueSortKey, RentalReceipt, UpdateCustomer, UpdateVideo, Video,
    VideoRental, VideoSortKey,
};

/// Video catalog storage.
#[async_trait]
pub trait VideoStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a video by id.
    async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>>;

    /// List videos matching `filter`, ordered by `sort`.
    async fn find_all(
        &self,
        filter: &VideoFilter,
        sort: &SortSpec<VideoSortKey>,
    ) -> AppResult<Vec<Video>>;

    /// Insert a video and return it with its assigned id.
    async fn create(&self, data: &NewVideo) -> AppResult<Video>;

    /// Apply a partial update. Returns `None` when the video does not exist.
    ///
    /// Fails with a state error when the new `total_inventory` is below the
    /// number of copies currently checked out.
    async fn update(&self, id: VideoId, data: &UpdateVideo) -> AppResult<Option<Video>>;

    /// Delete a video together with its rental history. Returns the deleted
    /// record, or `None` when it does not exist.
    ///
    /// Fails with a state error while copies are still checked out.
    async fn delete(&self, id: VideoId) -> AppResult<Option<Video>>;
}

/// Customer directory storage.
#[async_trait]
pub trait CustomerStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a customer by id.
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// List customers matching `filter`, ordered by `sort`.
    async fn find_all(
        &self,
        filter: &CustomerFilter,
        sort: &SortSpec<CustomerSortKey>,
    ) -> AppResult<Vec<Customer>>;

    /// Insert a customer and return it with its assigned id.
    async fn create(&self, data: &NewCustomer) -> AppResult<Customer>;

    /// Apply a partial update. Returns `None` when the customer does not exist.
    async fn update(&self, id: CustomerId, data: &UpdateCustomer)
    -> AppResult<Option<Customer>>;

    /// Delete a customer together with their rental history. Returns the
    /// deleted record, or `None` when it does not exist.
    ///
    /// Fails with a state error while the customer holds any copy.
    async fn delete(&self, id: CustomerId) -> AppResult<Option<Customer>>;
}

/// Rental ledger storage.
#[async_trait]
pub trait RentalStore: Send + Sync + std::fmt::Debug + 'static {
    /// Rent one copy of `video_id` to `customer_id`.
    ///
    /// Counting active rentals, the capacity check and the insert happen
    /// atomically with respect to every other checkout of the same video.
    /// Fails with not-found for an unknown video or customer and with a
    /// capacity error when no copy is on the shelf.
    async fn check_out(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
        checked_out_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<RentalReceipt>;

    /// Return the oldest outstanding copy of `video_id` held by
    /// `customer_id`.
    ///
    /// Fails with not-found for an unknown video or customer and with a
    /// state error when nothing is outstanding for the pair.
    async fn check_in(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
        checked_in_at: DateTime<Utc>,
    ) -> AppResult<RentalReceipt>;

    /// Current inventory counts, or `None` for an unknown video.
    async fn inventory(&self, video_id: VideoId) -> AppResult<Option<InventoryStatus>>;

    /// Customers holding a copy of `video_id`, earliest due date first.
    async fn find_active_by_video(&self, video_id: VideoId) -> AppResult<Vec<CustomerRental>>;

    /// Videos held by `customer_id`, earliest due date first.
    async fn find_active_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> AppResult<Vec<VideoRental>>;

    /// Active rentals whose due date is strictly before `as_of`.
    async fn find_overdue(
        &self,
        as_of: DateTime<Utc>,
        sort: &SortSpec<OverdueSortKey>,
    ) -> AppResult<Vec<OverdueRental>>;
}
