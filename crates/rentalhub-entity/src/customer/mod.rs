//! Customer domain entities.

pub mod model;
pub mod sort;

pub use model::{Customer, NewCustomer, UpdateCustomer};
pub use sort::CustomerSortKey;
