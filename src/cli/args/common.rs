//! Common CLI types shared across commands

use std::str::FromStr;

use crate::error::{ConfigError, Error};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Parses the `preferences.format` value from the config file
impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "unknown output format '{}', expected table or json",
                other
            ))
            .into()),
        }
    }
}
