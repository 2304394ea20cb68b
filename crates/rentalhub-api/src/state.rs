//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use rentalhub_core::config::AppConfig;
use rentalhub_core::traits::Clock;
use rentalhub_database::StoreManager;
use rentalhub_service::{CustomerService, RentalService, VideoService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Every field is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Store backend handles
    pub store: StoreManager,
    /// Video catalog service
    pub video_service: Arc<VideoService>,
    /// Customer directory service
    pub customer_service: Arc<CustomerService>,
    /// Rental ledger service
    pub rental_service: Arc<RentalService>,
}

impl AppState {
    /// Wire the services over `store` and `clock`.
    pub fn new(config: AppConfig, store: StoreManager, clock: Arc<dyn Clock>) -> Self {
        let video_service = Arc::new(VideoService::new(store.videos()));
        let customer_service = Arc::new(CustomerService::new(store.customers()));
        let rental_service = Arc::new(RentalService::new(
            store.videos(),
            store.customers(),
            store.rentals(),
            clock,
            config.rentals.loan_period(),
        ));

        Self {
            config: Arc::new(config),
            store,
            video_service,
            customer_service,
            rental_service,
        }
    }
}
