//! Custom Axum extractors.
//!
//! Each one rejects with an [`ApiError`](crate::error::ApiError) so that
//! malformed input renders as the usual JSON validation error.

pub mod json;
pub mod path;
pub mod query;

pub use json::ValidatedJson;
pub use path::IdPath;
pub use query::{CustomerListParams, ListQuery, OverdueParams, VideoListParams};
