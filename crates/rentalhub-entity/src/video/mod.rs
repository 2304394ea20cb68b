//! Video domain entities.

pub mod model;
pub mod sort;

pub use model::{NewVideo, UpdateVideo, Video};
pub use sort::VideoSortKey;
