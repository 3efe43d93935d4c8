//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::{ListParams, MAX_PAGE_SIZE};

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that lists a paginated resource:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Results per page (1-100)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(i64).range(1..=MAX_PAGE_SIZE))]
    pub limit: Option<i64>,

    /// Index of the first result to return
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub offset: Option<i64>,

    /// Follow next-page links and return every result
    #[arg(long, short = 'a', conflicts_with = "offset")]
    pub all: bool,
}

impl PaginationArgs {
    /// Convert CLI args to API list params.
    ///
    /// `default_limit` (the configured page size) applies when `--limit` is
    /// not given.
    pub fn to_params(&self, default_limit: i64) -> ListParams {
        let mut params = ListParams::new().limit(self.limit.unwrap_or(default_limit));

        if let Some(offset) = self.offset {
            params = params.offset(offset);
        }

        params
    }
}
