//! # rentalhub-database
//!
//! Store backends for RentalHub. The [`StoreManager`] selects one at
//! runtime based on configuration:
//!
//! - **postgres**: PostgreSQL through sqlx, with row locks serializing
//!   checkouts per video
//! - **memory**: process-local tables behind one async lock, used by tests
//!   and demos
//!
//! Both backends implement the traits in [`store`].

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use connection::DatabasePool;
pub use manager::StoreManager;
pub use memory::MemoryStore;
pub use store::{CustomerStore, RentalStore, VideoStore};
