//! Credential command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, run_list_command};
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::CredentialApi;
use crate::client::models::CredentialList;
use crate::error::Result;
use crate::models::CredentialDisplay;
use crate::output::print_detail;

/// Run the credential list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<CredentialList, CredentialDisplay, _, _>(
        opts,
        pagination,
        "credentials",
        |client, params| async move { client.list_credentials(&params).await },
    )
    .await
}

/// Run the credential get command
pub async fn get(opts: &GlobalOptions, credential_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credential = ctx.client.get_credential(credential_id).await?;

    print_detail(&credential, &CredentialDisplay::from(&credential), ctx.format)
}

/// Run the credential delete command
pub async fn delete(opts: &GlobalOptions, credential_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm_delete("credential", credential_id, yes)? {
        return Ok(());
    }

    ctx.client.delete_credential(credential_id).await?;
    eprintln!("{} Deleted credential {}", "✓".green(), credential_id);
    Ok(())
}
