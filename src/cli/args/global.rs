//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into one struct so handlers take a single
//! argument instead of each flag separately.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For every option the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are applied later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; the configured preference applies when unset
    pub format: Option<OutputFormat>,

    /// Account ID override
    pub account: Option<String>,

    /// Custom config file path (defaults to ~/.postureop/config.yaml)
    pub config: Option<String>,

    /// Service URL override
    pub service_url: Option<String>,

    /// Bearer token override
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            account: cli.account.clone(),
            config: cli.config.clone(),
            service_url: cli.service_url.clone(),
            token: cli.token.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Whether the token came from the command line or environment
    pub fn has_token_override(&self) -> bool {
        self.token.is_some()
    }
}
