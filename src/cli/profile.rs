//! Profile command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::ProfileApi;
use crate::client::models::{ControlList, ProfileList};
use crate::error::Result;
use crate::models::{ControlDisplay, ProfileDisplay};
use crate::output::print_detail;

/// Run the profile list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<ProfileList, ProfileDisplay, _, _>(
        opts,
        pagination,
        "profiles",
        |client, params| async move { client.list_profiles(&params).await },
    )
    .await
}

/// Run the profile get command
pub async fn get(opts: &GlobalOptions, profile_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profile = ctx.client.get_profile(profile_id).await?;

    print_detail(&profile, &ProfileDisplay::from(&profile), ctx.format)
}

/// Run the profile controls command
///
/// With `group`, the ID names a group profile and the group endpoint is used.
pub async fn controls(
    opts: &GlobalOptions,
    profile_id: &str,
    group: bool,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_list_command::<ControlList, ControlDisplay, _, _>(
        opts,
        pagination,
        "controls",
        |client, params| {
            let profile_id = profile_id.to_string();
            async move {
                if group {
                    client
                        .list_group_profile_controls(&profile_id, &params)
                        .await
                } else {
                    client.list_profile_controls(&profile_id, &params).await
                }
            }
        },
    )
    .await
}
