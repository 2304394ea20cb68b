//! CLI command definitions and dispatch.

pub mod inventory;
pub mod migrate;
pub mod overdue;
pub mod serve;

use std::future::Future;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use rentalhub_core::config::AppConfig;
use rentalhub_core::error::AppError;
use rentalhub_core::traits::SystemClock;
use rentalhub_database::StoreManager;
use rentalhub_service::RentalService;

use crate::output::OutputFormat;

/// RentalHub: video rental store backend
#[derive(Debug, Parser)]
#[command(name = "rentalhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// List overdue rentals
    Overdue(overdue::OverdueArgs),
    /// Show inventory counts for one video
    Inventory(inventory::InventoryArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Overdue(args) => overdue::execute(args, &self.config, self.format).await,
            Commands::Inventory(args) => {
                inventory::execute(args, &self.config, self.format).await
            }
        }
    }
}

/// Load configuration from file, overlay and environment.
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Open the configured store and a rental service over it, using the
/// wall clock.
pub async fn rental_service(config: &AppConfig) -> Result<(StoreManager, RentalService), AppError> {
    let store = StoreManager::connect(&config.database).await?;
    let service = RentalService::new(
        store.videos(),
        store.customers(),
        store.rentals(),
        Arc::new(SystemClock),
        config.rentals.loan_period(),
    );
    Ok((store, service))
}

/// Await `work`, then close `store` whether or not it succeeded.
pub async fn close_after<T>(
    store: &StoreManager,
    work: impl Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    let result = work.await;
    store.close().await;
    result
}
