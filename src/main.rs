//! postureop CLI - command-line client for the Posture Management API

use clap::Parser;
use log::LevelFilter;

mod cli;
mod models;
mod output;

use postureop::{client, config, error};

use cli::args::GlobalOptions;
use cli::{
    Cli, CollectorCommands, Commands, CredentialCommands, ProfileCommands, ScanCommands,
    ScopeCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise RUST_LOG applies, defaulting to warnings.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("postureop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Credential(cmd) => match cmd {
            CredentialCommands::List { pagination } => {
                cli::credential::list(&opts, &pagination).await
            }
            CredentialCommands::Get { credential_id } => {
                cli::credential::get(&opts, &credential_id).await
            }
            CredentialCommands::Delete { credential_id, yes } => {
                cli::credential::delete(&opts, &credential_id, yes).await
            }
        },
        Commands::Collector(cmd) => match cmd {
            CollectorCommands::List => cli::collector::list(&opts).await,
            CollectorCommands::Get { collector_id } => {
                cli::collector::get(&opts, &collector_id).await
            }
            CollectorCommands::Delete { collector_id, yes } => {
                cli::collector::delete(&opts, &collector_id, yes).await
            }
        },
        Commands::Scope(cmd) => match cmd {
            ScopeCommands::List => cli::scope::list(&opts).await,
            ScopeCommands::Get { scope_id } => cli::scope::get(&opts, &scope_id).await,
            ScopeCommands::Delete { scope_id, yes } => {
                cli::scope::delete(&opts, &scope_id, yes).await
            }
        },
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List { pagination } => cli::profile::list(&opts, &pagination).await,
            ProfileCommands::Get { profile_id } => cli::profile::get(&opts, &profile_id).await,
            ProfileCommands::Controls {
                profile_id,
                group,
                pagination,
            } => cli::profile::controls(&opts, &profile_id, group, &pagination).await,
        },
        Commands::Scan(cmd) => match cmd {
            ScanCommands::List { pagination } => cli::scan::list(&opts, &pagination).await,
            ScanCommands::Run {
                scope,
                profile,
                group_profile,
                name,
            } => {
                cli::scan::run(
                    &opts,
                    &scope,
                    &profile,
                    group_profile.as_deref(),
                    name.as_deref(),
                )
                .await
            }
            ScanCommands::Summary { scan_id, profile } => {
                cli::scan::summary(&opts, &scan_id, &profile).await
            }
            ScanCommands::Summaries { scope, pagination } => {
                cli::scan::summaries(&opts, &scope, &pagination).await
            }
        },
    }
}
