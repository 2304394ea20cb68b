//! # rentalhub-service
//!
//! Business logic service layer for RentalHub. Each service wraps the
//! store traits from `rentalhub-database`, resolves missing records into
//! not-found errors and logs the outcome of every write.
//!
//! Services follow constructor injection: stores and the clock are handed
//! in as `Arc` references at construction time.

pub mod customer;
pub mod rental;
pub mod video;

pub use customer::CustomerService;
pub use rental::RentalService;
pub use video::VideoService;
