use async_trait::async_trait;
use chrono::{DateTime, Utc};

use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerId, SortSpec, VideoId};
use rentalhub_entity::{
    Customer, CustomerRental, InventoryStatus, OverdueRental, OverdueSortKey, Rental,
    RentalReceipt, Video, VideoRental,
};

use super::MemoryStore;
use crate::store::RentalStore;

#[async_trait]
impl RentalStore for MemoryStore {
    async fn check_out(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
        checked_out_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<RentalReceipt> {
        let mut tables = self.tables.write().await;

        let total = tables
            .videos
            .get(&video_id)
            .map(|v| v.total_inventory)
            .ok_or_else(|| Video::not_found(video_id))?;
        if !tables.customers.contains_key(&customer_id) {
            return Err(Customer::not_found(customer_id));
        }
        let active = tables.active_count_for_video(video_id);
        InventoryStatus::new(video_id, total, active).ensure_available()?;

        let rental = Rental {
            id: tables.next_rental_id(),
            customer_id,
            video_id,
            due_date,
            checked_out: true,
            checked_out_at,
            checked_in_at: None,
        };
        tables.rentals.insert(rental.id, rental.clone());

        let status = InventoryStatus::new(video_id, total, active + 1);
        Ok(RentalReceipt::new(&rental, &status))
    }

    async fn check_in(
        &self,
        customer_id: CustomerId,
        video_id: VideoId,
        checked_in_at: DateTime<Utc>,
    ) -> AppResult<RentalReceipt> {
        let mut tables = self.tables.write().await;

        if !tables.videos.contains_key(&video_id) {
            return Err(Video::not_found(video_id));
        }
        if !tables.customers.contains_key(&customer_id) {
            return Err(Customer::not_found(customer_id));
        }

        let oldest = tables
            .active_rentals()
            .filter(|r| r.customer_id == customer_id && r.video_id == video_id)
            .min_by_key(|r| (r.checked_out_at, r.id))
            .map(|r| r.id)
            .ok_or_else(|| Rental::none_outstanding(customer_id, video_id))?;

        let rental = match tables.rentals.get_mut(&oldest) {
            Some(rental) => {
                rental.check_in(checked_in_at);
                rental.clone()
            }
            None => return Err(Rental::none_outstanding(customer_id, video_id)),
        };

        let status = tables
            .inventory(video_id)
            .ok_or_else(|| Video::not_found(video_id))?;
        Ok(RentalReceipt::new(&rental, &status))
    }

    async fn inventory(&self, video_id: VideoId) -> AppResult<Option<InventoryStatus>> {
        Ok(self.tables.read().await.inventory(video_id))
    }

    async fn find_active_by_video(&self, video_id: VideoId) -> AppResult<Vec<CustomerRental>> {
        let tables = self.tables.read().await;
        let mut rentals: Vec<&Rental> = tables
            .active_rentals()
            .filter(|r| r.video_id == video_id)
            .collect();
        rentals.sort_by_key(|r| (r.due_date, r.id));

        Ok(rentals
            .into_iter()
            .filter_map(|r| {
                tables.customers.get(&r.customer_id).map(|c| CustomerRental {
                    name: c.name.clone(),
                    phone: c.phone.clone(),
                    postal_code: c.postal_code.clone(),
                    due_date: r.due_date,
                })
            })
            .collect())
    }

    async fn find_active_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> AppResult<Vec<VideoRental>> {
        let tables = self.tables.read().await;
        let mut rentals: Vec<&Rental> = tables
            .active_rentals()
            .filter(|r| r.customer_id == customer_id)
            .collect();
        rentals.sort_by_key(|r| (r.due_date, r.id));

        Ok(rentals
            .into_iter()
            .filter_map(|r| {
                tables.videos.get(&r.video_id).map(|v| VideoRental {
                    title: v.title.clone(),
                    release_date: v.release_date,
                    due_date: r.due_date,
                })
            })
            .collect())
    }

    async fn find_overdue(
        &self,
        as_of: DateTime<Utc>,
        sort: &SortSpec<OverdueSortKey>,
    ) -> AppResult<Vec<OverdueRental>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<OverdueRental> = tables
            .rentals
            .values()
            .filter(|r| r.is_overdue_at(as_of))
            .filter_map(|r| {
                let video = tables.videos.get(&r.video_id)?;
                let customer = tables.customers.get(&r.customer_id)?;
                Some(OverdueRental {
                    rental_id: r.id,
                    video_id: r.video_id,
                    title: video.title.clone(),
                    customer_id: r.customer_id,
                    name: customer.name.clone(),
                    postal_code: customer.postal_code.clone(),
                    due_date: r.due_date,
                })
            })
            .collect();
        sort.sort(&mut rows, |a, b, key| key.compare(a, b));
        Ok(rows)
    }
}
