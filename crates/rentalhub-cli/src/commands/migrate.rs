//! Database migration management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentalhub_core::config::StoreProvider;
use rentalhub_core::error::AppError;
use rentalhub_database::DatabasePool;
use rentalhub_database::migration::{AppliedMigration, migration_status, run_migrations};

use crate::output::{self, OutputFormat};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show applied migrations
    Status,
}

#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
    installed_on: String,
    success: bool,
}

impl From<AppliedMigration> for MigrationRow {
    fn from(m: AppliedMigration) -> Self {
        Self {
            version: m.version,
            description: m.description,
            installed_on: m.installed_on.to_rfc3339(),
            success: m.success,
        }
    }
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    if config.database.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(format!(
            "Migrations need the postgres store, but '{}' is configured",
            config.database.provider
        )));
    }
    let pool = DatabasePool::connect(&config.database).await?;
    tracing::debug!(command = ?args.command, "Running migration command");

    match &args.command {
        MigrateCommand::Run => {
            run_migrations(pool.pool()).await?;
            output::print_success("All migrations applied.");
        }
        MigrateCommand::Status => {
            let rows: Vec<MigrationRow> = migration_status(pool.pool())
                .await?
                .into_iter()
                .map(MigrationRow::from)
                .collect();
            tracing::debug!(count = rows.len(), "Loaded migration history");
            output::print_list(&rows, format);
        }
    }

    pool.close().await;
    Ok(())
}
