//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, override handling, and client initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::PostureClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Configuration with command-line overrides applied
    pub config: Config,
    /// API client built from the effective configuration
    pub client: Arc<PostureClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// Loads the config file, applies flag/env overrides, checks that a
    /// token is available, and builds the client.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or no token is configured.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;
        let format = Self::resolve_format(opts, &config)?;

        debug!(
            "Using service {} (account: {})",
            config.service_url(),
            config.account_id.as_deref().unwrap_or("none")
        );
        let client = Arc::new(PostureClient::new(config.client_config()?)?);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Load the config file and layer the command-line overrides on top.
    ///
    /// A missing config file is fine when a token is supplied on the
    /// command line or in the environment.
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) if opts.has_token_override() => {
                Config::default()
            }
            Err(e) => return Err(e),
        };

        if let Some(ref token) = opts.token {
            config.token = Some(token.clone());
        }
        if let Some(ref account) = opts.account {
            config.account_id = Some(account.clone());
        }
        if let Some(ref url) = opts.service_url {
            config.service_url = Some(url.clone());
        }

        config.validate_auth()?;
        Ok(config)
    }

    fn resolve_format(opts: &GlobalOptions, config: &Config) -> Result<OutputFormat> {
        match (opts.format, config.preferences.format.as_deref()) {
            (Some(format), _) => Ok(format),
            (None, Some(preference)) => preference.parse(),
            (None, None) => Ok(OutputFormat::default()),
        }
    }

    /// Configured page size, used when `--limit` is not given.
    pub fn page_size(&self) -> i64 {
        self.config.preferences.page_size
    }
}
