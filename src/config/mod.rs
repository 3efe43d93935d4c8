//! Configuration management for postureop

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::posture::DEFAULT_REQUESTS_PER_SECOND;
use crate::client::{ClientConfig, DEFAULT_PAGE_SIZE, DEFAULT_SERVICE_URL, MAX_PAGE_SIZE};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Posture Management service URL; the public endpoint when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Default account ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default page size for list requests
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Client-side request rate limit
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_requests_per_second() -> u32 {
    DEFAULT_REQUESTS_PER_SECOND
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".postureop").join("config.yaml"))
    }

    /// The explicit path if one was given, otherwise the default path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `path`, or the default path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Holds the bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Check preference values the API would reject
    pub fn validate(&self) -> Result<()> {
        let page_size = self.preferences.page_size;
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ConfigError::Invalid(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, page_size
            ))
            .into());
        }
        if self.preferences.requests_per_second == 0 {
            return Err(
                ConfigError::Invalid("requests_per_second must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Validate that required configuration is present
    pub fn validate_auth(&self) -> Result<()> {
        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }

    /// The service URL requests go to
    pub fn service_url(&self) -> &str {
        self.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }

    /// Build the client configuration for this config
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.validate_auth()?;

        let token = self.token.clone().unwrap_or_default();
        let mut config = ClientConfig::new(token)
            .service_url(self.service_url())
            .requests_per_second(self.preferences.requests_per_second);
        if let Some(ref account_id) = self.account_id {
            config = config.account_id(account_id.clone());
        }

        Ok(config)
    }
}
