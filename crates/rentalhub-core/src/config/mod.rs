//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod database;
pub mod logging;
pub mod rental;
pub mod server;

use serde::{Deserialize, Serialize};

pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::rental::RentalConfig;
pub use self::server::ServerConfig;

use crate::error::AppError;

/// Environment variable naming the active environment overlay.
pub const ENV_VAR: &str = "RENTALHUB_ENV";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay) and
/// `RENTALHUB__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Store backend settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Rental policy settings.
    #[serde(default)]
    pub rentals: RentalConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the file at `config_path` with the `config/{env}` overlay named
    /// by `RENTALHUB_ENV` (default `development`) and environment variables
    /// prefixed with `RENTALHUB__` (e.g. `RENTALHUB__SERVER__PORT=9000`).
    /// Missing files are skipped. Out-of-range rental settings are rejected.
    pub fn load(config_path: &str) -> Result<Self, AppError> {
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("RENTALHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.rentals.validate()?;
        Ok(config)
    }
}
