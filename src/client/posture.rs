//! Posture Management API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::api::{CollectorApi, CredentialApi, ProfileApi, ScanApi, ScopeApi};
use super::models::{
    Collector, CollectorList, ControlList, CreateCollectorRequest, CreateCredentialRequest,
    CreateScopeRequest, CreateValidationRequest, Credential, CredentialList, Profile, ProfileList,
    ScanList, Scope, ScopeList, Summary, SummaryList, UpdateCollectorRequest,
    UpdateCredentialRequest, UpdateScopeRequest, ValidationResponse,
};
use super::pagination::ListParams;
use crate::error::{ApiError, ConfigError, Result};

/// Default Posture Management service URL
pub const DEFAULT_SERVICE_URL: &str = "https://us-south.compliance.cloud.ibm.com";

/// Default client-side request rate
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Path segments every endpoint lives under
const API_PREFIX: [&str; 2] = ["posture", "v2"];

/// Seconds to wait when a 429 carries no usable Retry-After header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const USER_AGENT: &str = concat!("postureop/", env!("CARGO_PKG_VERSION"));

/// Settings used to build a [`PostureClient`].
///
/// # Example
/// ```
/// use postureop::client::ClientConfig;
///
/// let config = ClientConfig::new("my-token").account_id("acc-123");
/// assert_eq!(config.account_id.as_deref(), Some("acc-123"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service, without the API prefix
    pub service_url: String,
    /// Bearer token sent on every request
    pub token: String,
    /// Account all requests are scoped to
    pub account_id: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Client-side request rate limit
    pub requests_per_second: u32,
}

impl ClientConfig {
    /// Create a config for the default service URL.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            token: token.into(),
            account_id: None,
            timeout: Duration::from_secs(30),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }

    /// Point the client at another service URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Scope requests to an account.
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the client-side rate limit.
    pub fn requests_per_second(mut self, rate: u32) -> Self {
        self.requests_per_second = rate;
        self
    }
}

/// Posture Management API client
pub struct PostureClient {
    http: HttpClient,
    base_url: Url,
    token: String,
    account_id: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl PostureClient {
    /// Create a new client from explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.service_url).map_err(|e| {
            ConfigError::Invalid(format!("service URL '{}': {}", config.service_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "service URL '{}' cannot be used as a base URL",
                config.service_url
            ))
            .into());
        }

        let rate = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            ConfigError::Invalid("requests_per_second must be greater than zero".to_string())
        })?;

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: config.token,
            account_id: config.account_id,
            rate_limiter: Arc::new(RateLimiter::direct(Quota::per_second(rate))),
        })
    }

    /// Build the URL for an endpoint below the API prefix.
    ///
    /// Each segment is percent-encoded, so IDs can be passed through as-is.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::Invalid(format!("service URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Start an authenticated request with the account query parameter applied
    fn request(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<RequestBuilder> {
        let mut params: Vec<(&'static str, String)> = Vec::with_capacity(query.len() + 1);
        if let Some(ref account_id) = self.account_id {
            params.push(("account_id", account_id.clone()));
        }
        params.extend_from_slice(query);

        Ok(self
            .http
            .request(method, self.endpoint(segments)?)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .query(&params))
    }

    /// Send a request and map non-success statuses to errors
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        // Apply rate limiting
        self.rate_limiter.until_ready().await;

        let request = builder.build().map_err(ApiError::from)?;
        debug!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("Response status {}", status);
        if status.is_success() {
            return Ok(response);
        }

        Err(error_for_status(response).await.into())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::GET, segments, query)?)
            .await?;
        parse_json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(method, segments, &[])?.json(body);
        let response = self.execute(builder).await?;
        parse_json(response).await
    }

    async fn delete(&self, segments: &[&str]) -> Result<()> {
        self.execute(self.request(Method::DELETE, segments, &[])?)
            .await?;
        Ok(())
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let data = response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    Ok(data)
}

/// Map an unsuccessful response to an [`ApiError`]
async fn error_for_status(response: Response) -> ApiError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(error_message(&body, "Resource not found")),
        StatusCode::CONFLICT => ApiError::Conflict(error_message(&body, "Resource conflict")),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(Duration::from_secs(retry_after)),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_message(&body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(error_message(&body, &format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// Pull a readable message out of an error body.
///
/// Understands `{"errors":[{"message":...}]}` and `{"message":...}`; any other
/// non-empty body is returned verbatim.
fn error_message(body: &str, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
    }

    #[derive(Deserialize)]
    struct ErrorEnvelope {
        #[serde(default)]
        errors: Vec<ErrorDetail>,
        message: Option<String>,
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let messages: Vec<String> = envelope
            .errors
            .into_iter()
            .filter_map(|e| e.message)
            .collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
        if let Some(message) = envelope.message {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl CredentialApi for PostureClient {
    async fn create_credential(&self, request: &CreateCredentialRequest) -> Result<Credential> {
        self.send_json(Method::POST, &["credentials"], request).await
    }

    async fn list_credentials(&self, params: &ListParams) -> Result<CredentialList> {
        self.get_json(&["credentials"], &params.to_query_params())
            .await
    }

    async fn get_credential(&self, credential_id: &str) -> Result<Credential> {
        self.get_json(&["credentials", credential_id], &[]).await
    }

    async fn update_credential(
        &self,
        credential_id: &str,
        request: &UpdateCredentialRequest,
    ) -> Result<Credential> {
        self.send_json(Method::PATCH, &["credentials", credential_id], request)
            .await
    }

    async fn delete_credential(&self, credential_id: &str) -> Result<()> {
        self.delete(&["credentials", credential_id]).await
    }
}

#[async_trait]
impl CollectorApi for PostureClient {
    async fn create_collector(&self, request: &CreateCollectorRequest) -> Result<Collector> {
        self.send_json(Method::POST, &["collectors"], request).await
    }

    async fn list_collectors(&self) -> Result<CollectorList> {
        self.get_json(&["collectors"], &[]).await
    }

    async fn get_collector(&self, collector_id: &str) -> Result<Collector> {
        self.get_json(&["collectors", collector_id], &[]).await
    }

    async fn update_collector(
        &self,
        collector_id: &str,
        request: &UpdateCollectorRequest,
    ) -> Result<Collector> {
        self.send_json(Method::PATCH, &["collectors", collector_id], request)
            .await
    }

    async fn delete_collector(&self, collector_id: &str) -> Result<()> {
        self.delete(&["collectors", collector_id]).await
    }
}

#[async_trait]
impl ScopeApi for PostureClient {
    async fn create_scope(&self, request: &CreateScopeRequest) -> Result<Scope> {
        self.send_json(Method::POST, &["scopes"], request).await
    }

    async fn list_scopes(&self) -> Result<ScopeList> {
        self.get_json(&["scopes"], &[]).await
    }

    async fn get_scope(&self, scope_id: &str) -> Result<Scope> {
        self.get_json(&["scopes", scope_id], &[]).await
    }

    async fn update_scope(&self, scope_id: &str, request: &UpdateScopeRequest) -> Result<Scope> {
        self.send_json(Method::PATCH, &["scopes", scope_id], request)
            .await
    }

    async fn delete_scope(&self, scope_id: &str) -> Result<()> {
        self.delete(&["scopes", scope_id]).await
    }
}

#[async_trait]
impl ProfileApi for PostureClient {
    async fn list_profiles(&self, params: &ListParams) -> Result<ProfileList> {
        self.get_json(&["profiles"], &params.to_query_params()).await
    }

    async fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.get_json(&["profiles", profile_id], &[]).await
    }

    async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        self.delete(&["profiles", profile_id]).await
    }

    async fn list_profile_controls(
        &self,
        profile_id: &str,
        params: &ListParams,
    ) -> Result<ControlList> {
        self.get_json(
            &["profiles", profile_id, "controls"],
            &params.to_query_params(),
        )
        .await
    }

    async fn list_group_profile_controls(
        &self,
        group_profile_id: &str,
        params: &ListParams,
    ) -> Result<ControlList> {
        self.get_json(
            &["profiles", group_profile_id, "groups", "controls"],
            &params.to_query_params(),
        )
        .await
    }
}

#[async_trait]
impl ScanApi for PostureClient {
    async fn create_validation(
        &self,
        request: &CreateValidationRequest,
    ) -> Result<ValidationResponse> {
        self.send_json(Method::POST, &["scans", "validations"], request)
            .await
    }

    async fn list_latest_scans(&self, params: &ListParams) -> Result<ScanList> {
        self.get_json(
            &["scans", "validations", "latest_scans"],
            &params.to_query_params(),
        )
        .await
    }

    async fn get_scan_summary(&self, scan_id: &str, profile_id: &str) -> Result<Summary> {
        self.get_json(
            &["scans", "validations", scan_id, "summary"],
            &[("profile_id", profile_id.to_string())],
        )
        .await
    }

    async fn list_scan_summaries(
        &self,
        scope_id: &str,
        params: &ListParams,
    ) -> Result<SummaryList> {
        let mut query = vec![("scope_id", scope_id.to_string())];
        query.extend(params.to_query_params());

        self.get_json(&["scans", "validations", "summaries"], &query)
            .await
    }
}
