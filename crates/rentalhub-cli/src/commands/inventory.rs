//! Inventory counts for one video.

use clap::Args;

use rentalhub_core::error::AppError;
use rentalhub_core::types::VideoId;

use crate::output::{self, OutputFormat};

/// Arguments for the inventory command
#[derive(Debug, Args)]
pub struct InventoryArgs {
    /// Video id
    pub video_id: VideoId,
}

/// Execute the inventory command
pub async fn execute(
    args: &InventoryArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (store, service) = super::rental_service(&config).await?;
    let status = super::close_after(&store, service.inventory(args.video_id)).await?;

    match format {
        OutputFormat::Json => output::print_json(&status),
        OutputFormat::Table => {
            println!("Video {}", status.video_id);
            output::print_kv("Total inventory", &status.total_inventory.to_string());
            output::print_kv("Checked out", &status.videos_checked_out_count.to_string());
            output::print_kv("Available", &status.available_inventory.to_string());
        }
    }
    Ok(())
}
