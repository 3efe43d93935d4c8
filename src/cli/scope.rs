//! Scope command implementations

use colored::Colorize;
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::confirm_delete;
use crate::client::ScopeApi;
use crate::error::Result;
use crate::models::ScopeDisplay;
use crate::output::{Formattable, print_detail};

/// Run the scope list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let scopes = ctx.client.list_scopes().await?.scopes;

    debug!("Fetched {} scopes", scopes.len());

    let display: Vec<ScopeDisplay> = scopes.into_iter().map(ScopeDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the scope get command
pub async fn get(opts: &GlobalOptions, scope_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let scope = ctx.client.get_scope(scope_id).await?;

    print_detail(&scope, &ScopeDisplay::from(&scope), ctx.format)
}

/// Run the scope delete command
pub async fn delete(opts: &GlobalOptions, scope_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_delete("scope", scope_id, yes)? {
        return Ok(());
    }

    ctx.client.delete_scope(scope_id).await?;
    eprintln!("{} Deleted scope {}", "✓".green(), scope_id);
    Ok(())
}
