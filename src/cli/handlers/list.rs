//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Build list params from the pagination flags
//! 3. Fetch one page, or every page with `--all`
//! 4. Convert to display type
//! 5. Print output, hinting at the next offset when more pages exist

use std::future::Future;
use std::sync::Arc;

use colored::Colorize;
use dialoguer::Confirm;
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::client::{ListParams, Paginated, Pager, PostureClient};
use crate::error::Result;
use crate::output::Formattable;

/// Run a standard list command over a paginated endpoint.
///
/// # Type Parameters
///
/// * `L` - The page type returned by the fetcher (e.g., `CredentialList`)
/// * `D` - The display type that implements `From<L::Item>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<CredentialList, CredentialDisplay, _, _>(
///     opts,
///     pagination,
///     "credentials",
///     |client, params| async move { client.list_credentials(&params).await },
/// ).await
/// ```
pub async fn run_list_command<L, D, F, Fut>(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    resource_name: &str,
    mut fetcher: F,
) -> Result<()>
where
    L: Paginated,
    D: From<L::Item> + Tabled + Serialize,
    F: FnMut(Arc<PostureClient>, ListParams) -> Fut,
    Fut: Future<Output = Result<L>>,
{
    let ctx = CommandContext::new(opts)?;
    let params = pagination.to_params(ctx.page_size());

    debug!("Fetching {} with {:?}", resource_name, params);

    let (items, next) = if pagination.all {
        let client = ctx.client.clone();
        let items = Pager::new(params, |params| fetcher(client.clone(), params))
            .collect_all()
            .await?;
        (items, None)
    } else {
        let page = fetcher(ctx.client.clone(), params).await?;
        let next = page.next_offset()?;
        (page.into_items(), next)
    };

    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    if let (Some(offset), OutputFormat::Table) = (next, ctx.format) {
        eprintln!(
            "{}",
            format!(
                "More {} available: rerun with --offset {} or --all",
                resource_name, offset
            )
            .dimmed()
        );
    }

    Ok(())
}

/// Ask before deleting unless `--yes` was given.
///
/// Returns whether the deletion should go ahead.
pub fn confirm_delete(kind: &str, id: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprintln!(
        "{} Delete {} \"{}\"? This cannot be undone.",
        "⚠".yellow(),
        kind,
        id
    );

    let confirmed = Confirm::new()
        .with_prompt("Confirm deletion?")
        .default(false)
        .interact()?;

    if !confirmed {
        eprintln!("Cancelled.");
    }
    Ok(confirmed)
}
