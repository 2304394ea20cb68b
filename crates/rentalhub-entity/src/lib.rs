//! # rentalhub-entity
//!
//! Domain records for RentalHub. Every struct in this crate represents a
//! table row, a joined query row or a domain value object. Table rows
//! additionally derive `sqlx::FromRow`.

pub mod customer;
pub mod inventory;
pub mod rental;
pub mod video;

pub use customer::{Customer, CustomerSortKey, NewCustomer, UpdateCustomer};
pub use inventory::InventoryStatus;
pub use rental::{
    CustomerRental, OverdueRental, OverdueSortKey, Rental, RentalReceipt, VideoRental,
};
pub use video::{NewVideo, UpdateVideo, Video, VideoSortKey};
