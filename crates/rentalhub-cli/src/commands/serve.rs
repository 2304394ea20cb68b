//! Start the RentalHub server.

use clap::{Args, ValueEnum};

use rentalhub_core::config::StoreProvider;
use rentalhub_core::error::AppError;

/// Store backend selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreArg {
    /// PostgreSQL
    Postgres,
    /// Process-local, lost on exit
    Memory,
}

impl From<StoreArg> for StoreProvider {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Postgres => StoreProvider::Postgres,
            StoreArg::Memory => StoreProvider::Memory,
        }
    }
}

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the store backend
    #[arg(long, value_enum)]
    pub store: Option<StoreArg>,

    /// Skip migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(store) = args.store {
        config.database.provider = store.into();
    }
    if args.no_migrate {
        config.database.auto_migrate = false;
    }

    println!("Starting RentalHub server...");
    println!("  Address: {}", config.server.bind_address());
    println!("  Store:   {}", config.database.provider);

    rentalhub_api::run_server(config).await
}
