//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{DEFAULT_SERVICE_URL, PostureClient, ScopeApi};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the token, account, and service URL, checks them with a
/// scope listing, and saves the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to postureop!".bold().green());
    println!("Let's set up your Posture Management configuration.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    let token: String = Password::with_theme(&theme)
        .with_prompt("Enter your bearer token")
        .interact()?;

    let account_id: String = Input::with_theme(&theme)
        .with_prompt("Account ID (leave empty for none)")
        .with_initial_text(config.account_id.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let default_url = opts
        .service_url
        .clone()
        .or_else(|| config.service_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    let service_url: String = Input::with_theme(&theme)
        .with_prompt("Service URL")
        .default(default_url)
        .interact_text()?;

    config.token = Some(token);
    config.account_id = Some(account_id.trim().to_string()).filter(|id| !id.is_empty());
    config.service_url = if service_url == DEFAULT_SERVICE_URL {
        None
    } else {
        Some(service_url)
    };

    println!("\n{}", "Checking access...".cyan());
    let client = PostureClient::new(config.client_config()?)?;
    let scopes = client.list_scopes().await?.scopes;
    println!(
        "{} Connected. {} scope(s) visible.",
        "✓".green(),
        scopes.len()
    );

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "postureop status".cyan());
    println!("  {} - List scopes", "postureop scope list".cyan());

    Ok(())
}
