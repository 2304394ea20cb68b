//! Overdue rental report.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rentalhub_core::error::AppError;
use rentalhub_core::types::SortSpec;
use rentalhub_entity::OverdueRental;

use crate::output::{self, OutputFormat};

/// Arguments for the overdue command
#[derive(Debug, Args)]
pub struct OverdueArgs {
    /// Reference instant (RFC 3339); defaults to now
    #[arg(long)]
    pub as_of: Option<String>,

    /// Sort direction for the default keys: asc or desc
    #[arg(long)]
    pub sort: Option<String>,

    /// Comma-separated sort fields, `-` prefix for descending
    #[arg(long)]
    pub order_by: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct OverdueRow {
    video_id: i64,
    title: String,
    customer_id: i64,
    name: String,
    postal_code: String,
    due_date: String,
}

impl From<OverdueRental> for OverdueRow {
    fn from(r: OverdueRental) -> Self {
        Self {
            video_id: r.video_id.get(),
            title: r.title,
            customer_id: r.customer_id.get(),
            name: r.name,
            postal_code: r.postal_code,
            due_date: r.due_date.to_rfc3339(),
        }
    }
}

/// Execute the overdue command
pub async fn execute(
    args: &OverdueArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let as_of = args
        .as_of
        .as_deref()
        .map(|raw| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .map_err(|e| AppError::validation(format!("Invalid --as-of '{raw}': {e}")))
        })
        .transpose()?;
    let sort = SortSpec::from_query(args.sort.as_deref(), args.order_by.as_deref())?;

    let config = super::load_config(config_path)?;
    let (store, service) = super::rental_service(&config).await?;
    let overdue = super::close_after(&store, service.overdue(as_of, &sort)).await?;
    let rows: Vec<OverdueRow> = overdue.into_iter().map(OverdueRow::from).collect();

    output::print_list(&rows, format);
    Ok(())
}
