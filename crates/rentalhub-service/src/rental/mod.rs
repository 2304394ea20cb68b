//! Rental ledger service: checkout, check-in and the rental queries.

pub mod service;

pub use service::RentalService;
