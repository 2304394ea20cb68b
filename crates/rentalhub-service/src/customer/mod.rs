//! Customer directory service.

pub mod service;

pub use service::CustomerService;
