//! Checkout, check-in and the rental listings.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use rentalhub_core::error::{AppError, ErrorKind};
use rentalhub_core::result::AppResult;
use rentalhub_core::traits::Clock;
use rentalhub_core::types::{CustomerId, SortSpec, VideoId};
use rentalhub_database::{CustomerStore, RentalStore, VideoStore};
use rentalhub_entity::{
    Customer, CustomerRental, InventoryStatus, OverdueRental, OverdueSortKey, RentalReceipt,
    Video, VideoRental,
};

/// Handles the rental ledger.
///
/// Every "now" (checkout time, due date, check-in time, the default overdue
/// cut-off) comes from the injected [`Clock`].
#[derive(Debug, Clone)]
pub struct RentalService {
    videos: Arc<dyn VideoStore>,
    customers: Arc<dyn CustomerStore>,
    rentals: Arc<dyn RentalStore>,
    clock: Arc<dyn Clock>,
    /// Time between checkout and due date.
    loan_period: Duration,
}

impl RentalService {
    /// Creates a new rental service.
    pub fn new(
        videos: Arc<dyn VideoStore>,
        customers: Arc<dyn CustomerStore>,
        rentals: Arc<dyn RentalStore>,
        clock: Arc<dyn Clock>,
        loan_period: Duration,
    ) -> Self {
        Self {
            videos,
            customers,
            rentals,
            clock,
            loan_period,
        }
    }

    /// Rents one copy of a video to a customer, due one loan period from now.
    pub async fn check_out(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
    ) -> AppResult<RentalReceipt> {
        let now = self.clock.now();
        let due_date = now.checked_add_signed(self.loan_period).ok_or_else(|| {
            AppError::configuration(format!(
                "Loan period of {} days puts the due date out of range",
                self.loan_period.num_days()
            ))
        })?;

        match self
            .rentals
            .check_out(customer_id, video_id, now, due_date)
            .await
        {
            Ok(receipt) => {
                info!(
                    customer_id = %customer_id,
                    video_id = %video_id,
                    due_date = %receipt.due_date,
                    available_inventory = receipt.available_inventory,
                    "Video checked out"
                );
                Ok(receipt)
            }
            Err(e) => {
                if e.kind == ErrorKind::Capacity {
                    warn!(customer_id = %customer_id, video_id = %video_id, "No copy available");
                }
                Err(e)
            }
        }
    }

    /// Returns the customer's oldest outstanding copy of a video.
    pub async fn check_in(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
    ) -> AppResult<RentalReceipt> {
        let receipt = self
            .rentals
            .check_in(customer_id, video_id, self.clock.now())
            .await?;
        info!(
            customer_id = %customer_id,
            video_id = %video_id,
            available_inventory = receipt.available_inventory,
            "Video checked in"
        );
        Ok(receipt)
    }

    /// Copies owned, out and on the shelf for one video.
    pub async fn inventory(&self, video_id: VideoId) -> AppResult<InventoryStatus> {
        self.rentals
            .inventory(video_id)
            .await?
            .ok_or_else(|| Video::not_found(video_id))
    }

    /// Customers currently holding a copy of the video.
    pub async fn customers_holding(&self, video_id: VideoId) -> AppResult<Vec<CustomerRental>> {
        self.videos
            .find_by_id(video_id)
            .await?
            .ok_or_else(|| Video::not_found(video_id))?;
        self.rentals.find_active_by_video(video_id).await
    }

    /// Videos the customer currently holds.
    pub async fn videos_held_by(&self, customer_id: CustomerId) -> AppResult<Vec<VideoRental>> {
        self.customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| Customer::not_found(customer_id))?;
        self.rentals.find_active_by_customer(customer_id).await
    }

    /// Open rentals due strictly before `as_of`, or before the clock's
    /// current time when `as_of` is not given.
    pub async fn overdue(
        &self,
        as_of: Option<DateTime<Utc>>,
        sort: &SortSpec<OverdueSortKey>,
    ) -> AppResult<Vec<OverdueRental>> {
        let as_of = as_of.unwrap_or_else(|| self.clock.now());
        let rows = self.rentals.find_overdue(as_of, sort).await?;
        debug!(as_of = %as_of, count = rows.len(), "Listed overdue rentals");
        Ok(rows)
    }
}
