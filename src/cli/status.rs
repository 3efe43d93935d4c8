//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "postureop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_from(&config_path) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            if opts.has_token_override() {
                println!("{} Bearer token supplied by flag or environment", "✓".green());
            } else if config.validate_auth().is_ok() {
                println!("{} Bearer token configured", "✓".green());
            } else {
                println!("{} Bearer token not configured", "✗".red());
                println!("  → Run 'postureop init' to configure");
            }

            match opts.account.as_ref().or(config.account_id.as_ref()) {
                Some(account_id) => println!("{} Account: {}", "✓".green(), account_id),
                None => {
                    println!("{} No account set", "○".dimmed());
                    println!("  → Pass --account or set account_id in the config file");
                }
            }

            let service_url = opts
                .service_url
                .as_deref()
                .unwrap_or_else(|| config.service_url());
            println!("{} Service URL: {}", "○".dimmed(), service_url.cyan());

            println!(
                "{} Page size: {}, rate limit: {}/s",
                "○".dimmed(),
                config.preferences.page_size,
                config.preferences.requests_per_second
            );
            println!();
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
            println!(
                "Run {} to create a configuration file.",
                "postureop init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
