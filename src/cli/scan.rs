//! Scan command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::client::ScanApi;
use crate::client::models::{CreateValidationRequest, ScanList, SummaryList};
use crate::error::{ApiError, Result};
use crate::models::{ScanDisplay, SummaryDisplay};
use crate::output::{json, print_detail};

/// Run the scan list command (latest scan per scope and profile)
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<ScanList, ScanDisplay, _, _>(
        opts,
        pagination,
        "scans",
        |client, params| async move { client.list_latest_scans(&params).await },
    )
    .await
}

/// Run the scan run command
pub async fn run(
    opts: &GlobalOptions,
    scope_id: &str,
    profile_id: &str,
    group_profile_id: Option<&str>,
    name: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = CreateValidationRequest {
        scope_id: scope_id.to_string(),
        profile_id: profile_id.to_string(),
        group_profile_id: group_profile_id.map(str::to_string),
        name: name.map(str::to_string),
    };

    debug!(
        "Starting validation of scope {} against profile {}",
        scope_id, profile_id
    );
    let response = ctx.client.create_validation(&request).await?;

    if !response.result {
        return Err(ApiError::BadRequest(response.message).into());
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&response)?),
        OutputFormat::Table => {
            println!("{} {}", "✓".green(), response.message);
            println!(
                "  Check progress with {}",
                format!("postureop scan summaries --scope {}", scope_id).cyan()
            );
        }
    }

    Ok(())
}

/// Run the scan summary command
pub async fn summary(opts: &GlobalOptions, scan_id: &str, profile_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let summary = ctx.client.get_scan_summary(scan_id, profile_id).await?;

    print_detail(&summary, &SummaryDisplay::from(&summary), ctx.format)
}

/// Run the scan summaries command
pub async fn summaries(
    opts: &GlobalOptions,
    scope_id: &str,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_list_command::<SummaryList, SummaryDisplay, _, _>(
        opts,
        pagination,
        "summaries",
        |client, params| {
            let scope_id = scope_id.to_string();
            async move { client.list_scan_summaries(&scope_id, &params).await }
        },
    )
    .await
}
