//! # rentalhub-core
//!
//! Core crate for RentalHub. Contains configuration schemas, typed
//! identifiers, the clock abstraction, sort-key lists and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other RentalHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
