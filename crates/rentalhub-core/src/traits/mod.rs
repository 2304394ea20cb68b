//! Core traits defined in `rentalhub-core` and implemented or consumed by
//! other crates.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
