//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use rentalhub_core::config::{DatabaseConfig, StoreProvider};
use rentalhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::postgres::{CustomerRepository, RentalRepository, VideoRepository};
use crate::store::{CustomerStore, RentalStore, VideoStore};

/// Handles to the three stores of the selected backend.
///
/// The backend is chosen once at construction time. Clones share the
/// same pool or tables.
#[derive(Debug, Clone)]
pub struct StoreManager {
    videos: Arc<dyn VideoStore>,
    customers: Arc<dyn CustomerStore>,
    rentals: Arc<dyn RentalStore>,
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Open the backend named in configuration. For PostgreSQL this
    /// connects the pool and, when `auto_migrate` is set, applies pending
    /// migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL store");
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Build the manager over an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            videos: Arc::new(VideoRepository::new(pg.clone())),
            customers: Arc::new(CustomerRepository::new(pg.clone())),
            rentals: Arc::new(RentalRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Build the manager over an in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            videos: Arc::new(store.clone()),
            customers: Arc::new(store.clone()),
            rentals: Arc::new(store),
            pool: None,
        }
    }

    /// Video store.
    pub fn videos(&self) -> Arc<dyn VideoStore> {
        Arc::clone(&self.videos)
    }

    /// Customer store.
    pub fn customers(&self) -> Arc<dyn CustomerStore> {
        Arc::clone(&self.customers)
    }

    /// Rental store.
    pub fn rentals(&self) -> Arc<dyn RentalStore> {
        Arc::clone(&self.rentals)
    }

    /// The PostgreSQL pool, when that backend is active.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Which backend is active.
    pub fn provider(&self) -> StoreProvider {
        match self.pool {
            Some(_) => StoreProvider::Postgres,
            None => StoreProvider::Memory,
        }
    }

    /// Whether the backend can serve requests.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
