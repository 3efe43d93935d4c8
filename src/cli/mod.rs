//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod collector;
pub mod context;
pub mod credential;
pub mod handlers;
pub mod init;
pub mod profile;
pub mod scan;
pub mod scope;
pub mod status;

pub use args::{OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// postureop - command-line client for the Posture Management API
#[derive(Parser, Debug)]
#[command(name = "postureop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "POSTUREOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override the configured account ID
    #[arg(long, global = true, env = "POSTUREOP_ACCOUNT_ID", hide_env = true)]
    pub account: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "POSTUREOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the service URL
    #[arg(long, global = true, env = "POSTUREOP_SERVICE_URL", hide_env = true)]
    pub service_url: Option<String>,

    /// Bearer token to use instead of the configured one
    #[arg(long, global = true, env = "POSTUREOP_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "POSTUREOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize postureop configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage credentials
    #[command(subcommand)]
    Credential(CredentialCommands),

    /// Manage collectors
    #[command(subcommand)]
    Collector(CollectorCommands),

    /// Manage scopes
    #[command(subcommand)]
    Scope(ScopeCommands),

    /// Browse profiles and their controls
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Run validation scans and view results
    #[command(subcommand)]
    Scan(ScanCommands),
}

/// Credential subcommands
#[derive(Subcommand, Debug)]
pub enum CredentialCommands {
    /// List credentials
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            postureop credential list                  # First page\n  \
            postureop credential list --offset 50      # Start at the 51st credential\n  \
            postureop credential list --all --format json  # Every page, as JSON"
    )]
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a credential
    Get {
        /// Credential ID
        credential_id: String,
    },

    /// Delete a credential
    Delete {
        /// Credential ID
        credential_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Collector subcommands
#[derive(Subcommand, Debug)]
pub enum CollectorCommands {
    /// List collectors
    #[command(visible_alias = "ls")]
    List,

    /// Show a collector
    Get {
        /// Collector ID
        collector_id: String,
    },

    /// Delete a collector
    Delete {
        /// Collector ID
        collector_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Scope subcommands
#[derive(Subcommand, Debug)]
pub enum ScopeCommands {
    /// List scopes
    #[command(visible_alias = "ls")]
    List,

    /// Show a scope
    Get {
        /// Scope ID
        scope_id: String,
    },

    /// Delete a scope
    Delete {
        /// Scope ID
        scope_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List profiles
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a profile
    Get {
        /// Profile ID
        profile_id: String,
    },

    /// List the controls of a profile
    #[command(after_help = "EXAMPLES:\n  \
            postureop profile controls 48              # Controls of profile 48\n  \
            postureop profile controls 90 --group      # Controls of group profile 90\n  \
            postureop profile controls 48 --all        # Every page")]
    Controls {
        /// Profile ID
        profile_id: String,

        /// Treat the ID as a group profile
        #[arg(long)]
        group: bool,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Scan subcommands
#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// List the latest scan of each scope and profile
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Start a validation scan
    #[command(after_help = "EXAMPLES:\n  \
            postureop scan run --scope 1 --profile 48\n  \
            postureop scan run --scope 1 --profile 48 --name nightly")]
    Run {
        /// Scope to scan
        #[arg(long)]
        scope: String,

        /// Profile to validate against
        #[arg(long)]
        profile: String,

        /// Group profile to validate against
        #[arg(long = "group-profile")]
        group_profile: Option<String>,

        /// Name for the scan
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the summary of a scan for one profile
    Summary {
        /// Scan ID
        scan_id: String,

        /// Profile the scan ran against
        #[arg(long)]
        profile: String,
    },

    /// List scan summaries for a scope
    Summaries {
        /// Scope ID
        #[arg(long)]
        scope: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}
