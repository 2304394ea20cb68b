//! Rental domain entities.

pub mod model;
pub mod receipt;
pub mod view;

pub use model::Rental;
pub use receipt::RentalReceipt;
pub use view::{CustomerRental, OverdueRental, OverdueSortKey, VideoRental};
