//! Core type definitions used across the RentalHub workspace.

pub mod filter;
pub mod id;
pub mod sorting;

pub use filter::{CustomerFilter, VideoFilter};
pub use id::*;
pub use sorting::{SortDirection, SortField, SortKey, SortSpec};
