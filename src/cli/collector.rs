//! Collector command implementations

use colored::Colorize;
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::confirm_delete;
use crate::client::CollectorApi;
use crate::error::Result;
use crate::models::CollectorDisplay;
use crate::output::{Formattable, print_detail};

/// Run the collector list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let collectors = ctx.client.list_collectors().await?.collectors;

    debug!("Fetched {} collectors", collectors.len());

    let display: Vec<CollectorDisplay> =
        collectors.into_iter().map(CollectorDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the collector get command
pub async fn get(opts: &GlobalOptions, collector_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let collector = ctx.client.get_collector(collector_id).await?;

    print_detail(&collector, &CollectorDisplay::from(&collector), ctx.format)
}

/// Run the collector delete command
pub async fn delete(opts: &GlobalOptions, collector_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_delete("collector", collector_id, yes)? {
        return Ok(());
    }

    ctx.client.delete_collector(collector_id).await?;
    eprintln!("{} Deleted collector {}", "✓".green(), collector_id);
    Ok(())
}
