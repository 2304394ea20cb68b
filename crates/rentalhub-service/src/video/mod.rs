//! Video catalog service.

pub mod service;

pub use service::VideoService;
