//! Error types for postureop

use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for postureop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `postureop init` or refresh your bearer token.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Pagination errors
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The `offset` query parameter of a next-page link is not an integer.
    #[error("Malformed offset '{value}' in next page link: {source}")]
    MalformedOffset {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A next-page link points at or before the page just fetched.
    #[error("Next page link does not advance: offset {next} after offset {current}")]
    Stalled { current: i64, next: i64 },

    /// A pager was asked for another page after the last one.
    #[error("No more pages to fetch")]
    Exhausted,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `postureop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Bearer token not configured. Run `postureop init` or pass --token.")]
    MissingToken,

}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
