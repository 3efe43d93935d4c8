//! Mock Posture Management client for testing
//!
//! Serves canned resources through the API traits without making real API
//! calls. List endpoints page through the configured items the way the
//! service does, including `next` links carrying the following offset.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{CollectorApi, CredentialApi, ProfileApi, ScanApi, ScopeApi};
use super::models::{
    Collector, CollectorList, Control, ControlList, CreateCollectorRequest,
    CreateCredentialRequest, CreateScopeRequest, CreateValidationRequest, Credential,
    CredentialList, Profile, ProfileList, Scan, ScanList, Scope, ScopeList, Summary, SummaryList,
    UpdateCollectorRequest, UpdateCredentialRequest, UpdateScopeRequest, ValidationResponse,
};
use super::pagination::{DEFAULT_PAGE_SIZE, ListParams, PageLink, PageMeta};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockPostureClient::new()
///     .with_credentials(vec![credential("cred-1"), credential("cred-2")])
///     .await;
///
/// let all = mock.list_all_credentials(Some(1)).await?;
/// assert_eq!(all.len(), 2);
/// assert_eq!(mock.call_count("list_credentials").await, 2);
/// ```
#[derive(Default)]
pub struct MockPostureClient {
    credentials: Arc<Mutex<Vec<Credential>>>,
    collectors: Arc<Mutex<Vec<Collector>>>,
    scopes: Arc<Mutex<Vec<Scope>>>,
    profiles: Arc<Mutex<Vec<Profile>>>,
    controls: Arc<Mutex<Vec<Control>>>,
    scans: Arc<Mutex<Vec<Scan>>>,
    summaries: Arc<Mutex<Vec<Summary>>>,
    /// Replaces the href of every generated `next` link
    next_href: Arc<Mutex<Option<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_credentials")
    pub method: &'static str,
    /// Resource ID the call targeted, if any
    pub resource_id: Option<String>,
    /// Pagination parameters, for list calls
    pub params: Option<ListParams>,
}

impl MockPostureClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_credentials(self, credentials: Vec<Credential>) -> Self {
        *self.credentials.lock().await = credentials;
        self
    }

    pub async fn with_collectors(self, collectors: Vec<Collector>) -> Self {
        *self.collectors.lock().await = collectors;
        self
    }

    pub async fn with_scopes(self, scopes: Vec<Scope>) -> Self {
        *self.scopes.lock().await = scopes;
        self
    }

    pub async fn with_profiles(self, profiles: Vec<Profile>) -> Self {
        *self.profiles.lock().await = profiles;
        self
    }

    /// Controls returned for any profile or group profile.
    pub async fn with_controls(self, controls: Vec<Control>) -> Self {
        *self.controls.lock().await = controls;
        self
    }

    pub async fn with_scans(self, scans: Vec<Scan>) -> Self {
        *self.scans.lock().await = scans;
        self
    }

    pub async fn with_summaries(self, summaries: Vec<Summary>) -> Self {
        *self.summaries.lock().await = summaries;
        self
    }

    /// Serve `href` as the `next` link whenever a later page exists.
    pub async fn with_next_href(self, href: impl Into<String>) -> Self {
        *self.next_href.lock().await = Some(href.into());
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of calls made to `method`.
    pub async fn call_count(&self, method: &str) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    /// Record the call and return the configured error, if any.
    async fn record(
        &self,
        method: &'static str,
        resource_id: Option<&str>,
        params: Option<&ListParams>,
    ) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method,
            resource_id: resource_id.map(str::to_string),
            params: params.cloned(),
        });

        match self.error.lock().await.take() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    /// Slice `items` into the page `params` asks for, with service-style links.
    async fn paginate<T: Clone>(
        &self,
        items: &[T],
        params: &ListParams,
        path: &str,
    ) -> (PageMeta, Vec<T>) {
        let total = items.len() as i64;
        let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let offset = params.offset.unwrap_or(0).clamp(0, total);
        let end = (offset + limit).min(total);

        let link = |at: i64| PageLink::new(format!("{}?offset={}&limit={}", path, at, limit));
        let next_href = self.next_href.lock().await.clone();

        let next = (end < total).then(|| match next_href {
            Some(href) => PageLink::new(href),
            None => link(end),
        });

        let meta = PageMeta {
            offset,
            limit,
            total_count: total,
            first: Some(link(0)),
            last: Some(link(((total - 1).max(0) / limit) * limit)),
            previous: (offset > 0).then(|| link((offset - limit).max(0))),
            next,
        };

        (meta, items[offset as usize..end as usize].to_vec())
    }
}

fn not_found(kind: &str, id: &str) -> ApiError {
    ApiError::NotFound(format!("{} {}", kind, id))
}

#[async_trait]
impl CredentialApi for MockPostureClient {
    async fn create_credential(&self, request: &CreateCredentialRequest) -> Result<Credential> {
        self.record("create_credential", None, None).await?;

        let mut credentials = self.credentials.lock().await;
        let credential = Credential {
            id: format!("cred-{}", credentials.len() + 1),
            name: request.name.clone(),
            description: request.description.clone(),
            credential_type: request.credential_type,
            enabled: request.enabled,
            purpose: request.purpose.clone(),
            display_fields: Some(request.display_fields.clone()),
            created_by: None,
            created_at: Some(Utc::now()),
            updated_by: None,
            updated_at: None,
        };
        credentials.push(credential.clone());
        Ok(credential)
    }

    async fn list_credentials(&self, params: &ListParams) -> Result<CredentialList> {
        self.record("list_credentials", None, Some(params)).await?;

        let credentials = self.credentials.lock().await.clone();
        let (page, credentials) = self
            .paginate(&credentials, params, "/posture/v2/credentials")
            .await;
        Ok(CredentialList { page, credentials })
    }

    async fn get_credential(&self, credential_id: &str) -> Result<Credential> {
        self.record("get_credential", Some(credential_id), None)
            .await?;

        self.credentials
            .lock()
            .await
            .iter()
            .find(|c| c.id == credential_id)
            .cloned()
            .ok_or_else(|| not_found("Credential", credential_id).into())
    }

    async fn update_credential(
        &self,
        credential_id: &str,
        request: &UpdateCredentialRequest,
    ) -> Result<Credential> {
        self.record("update_credential", Some(credential_id), None)
            .await?;

        let mut credentials = self.credentials.lock().await;
        let credential = credentials
            .iter_mut()
            .find(|c| c.id == credential_id)
            .ok_or_else(|| not_found("Credential", credential_id))?;

        if let Some(ref name) = request.name {
            credential.name = name.clone();
        }
        if let Some(ref description) = request.description {
            credential.description = Some(description.clone());
        }
        if let Some(enabled) = request.enabled {
            credential.enabled = enabled;
        }
        if let Some(ref purpose) = request.purpose {
            credential.purpose = Some(purpose.clone());
        }
        if let Some(ref fields) = request.display_fields {
            credential.display_fields = Some(fields.clone());
        }
        credential.updated_at = Some(Utc::now());

        Ok(credential.clone())
    }

    async fn delete_credential(&self, credential_id: &str) -> Result<()> {
        self.record("delete_credential", Some(credential_id), None)
            .await?;

        let mut credentials = self.credentials.lock().await;
        let before = credentials.len();
        credentials.retain(|c| c.id != credential_id);
        if credentials.len() == before {
            return Err(not_found("Credential", credential_id).into());
        }
        Ok(())
    }
}

#[async_trait]
impl CollectorApi for MockPostureClient {
    async fn create_collector(&self, request: &CreateCollectorRequest) -> Result<Collector> {
        self.record("create_collector", None, None).await?;

        let mut collectors = self.collectors.lock().await;
        let collector = Collector {
            id: format!("col-{}", collectors.len() + 1),
            name: request.name.clone(),
            display_name: Some(request.name.clone()),
            description: request.description.clone(),
            status: Some("ready_to_install".to_string()),
            collector_type: Some(request.collector_type),
            enabled: true,
            collector_version: None,
            image_version: None,
            last_heartbeat: None,
            registration_code: Some("mock-registration".to_string()),
            hostname: None,
            use_private_endpoint: false,
            created_by: None,
            created_at: Some(Utc::now()),
            updated_by: None,
            updated_at: None,
        };
        collectors.push(collector.clone());
        Ok(collector)
    }

    async fn list_collectors(&self) -> Result<CollectorList> {
        self.record("list_collectors", None, None).await?;

        Ok(CollectorList {
            collectors: self.collectors.lock().await.clone(),
        })
    }

    async fn get_collector(&self, collector_id: &str) -> Result<Collector> {
        self.record("get_collector", Some(collector_id), None)
            .await?;

        self.collectors
            .lock()
            .await
            .iter()
            .find(|c| c.id == collector_id)
            .cloned()
            .ok_or_else(|| not_found("Collector", collector_id).into())
    }

    async fn update_collector(
        &self,
        collector_id: &str,
        request: &UpdateCollectorRequest,
    ) -> Result<Collector> {
        self.record("update_collector", Some(collector_id), None)
            .await?;

        let mut collectors = self.collectors.lock().await;
        let collector = collectors
            .iter_mut()
            .find(|c| c.id == collector_id)
            .ok_or_else(|| not_found("Collector", collector_id))?;

        if let Some(ref display_name) = request.display_name {
            collector.display_name = Some(display_name.clone());
        }
        if let Some(ref description) = request.description {
            collector.description = Some(description.clone());
        }
        if let Some(use_private_endpoint) = request.use_private_endpoint {
            collector.use_private_endpoint = use_private_endpoint;
        }

        Ok(collector.clone())
    }

    async fn delete_collector(&self, collector_id: &str) -> Result<()> {
        self.record("delete_collector", Some(collector_id), None)
            .await?;

        let mut collectors = self.collectors.lock().await;
        let before = collectors.len();
        collectors.retain(|c| c.id != collector_id);
        if collectors.len() == before {
            return Err(not_found("Collector", collector_id).into());
        }
        Ok(())
    }
}

#[async_trait]
impl ScopeApi for MockPostureClient {
    async fn create_scope(&self, request: &CreateScopeRequest) -> Result<Scope> {
        self.record("create_scope", None, None).await?;

        let mut scopes = self.scopes.lock().await;
        let scope = Scope {
            id: format!("scope-{}", scopes.len() + 1),
            name: request.name.clone(),
            description: request.description.clone(),
            environment_type: Some(request.environment_type.clone()),
            credential_id: Some(request.credential_id.clone()),
            collector_ids: request.collector_ids.clone(),
            enabled: true,
            created_by: None,
            created_at: Some(Utc::now()),
            modified_by: None,
            modified_at: None,
        };
        scopes.push(scope.clone());
        Ok(scope)
    }

    async fn list_scopes(&self) -> Result<ScopeList> {
        self.record("list_scopes", None, None).await?;

        Ok(ScopeList {
            scopes: self.scopes.lock().await.clone(),
        })
    }

    async fn get_scope(&self, scope_id: &str) -> Result<Scope> {
        self.record("get_scope", Some(scope_id), None).await?;

        self.scopes
            .lock()
            .await
            .iter()
            .find(|s| s.id == scope_id)
            .cloned()
            .ok_or_else(|| not_found("Scope", scope_id).into())
    }

    async fn update_scope(&self, scope_id: &str, request: &UpdateScopeRequest) -> Result<Scope> {
        self.record("update_scope", Some(scope_id), None).await?;

        let mut scopes = self.scopes.lock().await;
        let scope = scopes
            .iter_mut()
            .find(|s| s.id == scope_id)
            .ok_or_else(|| not_found("Scope", scope_id))?;

        if let Some(ref name) = request.name {
            scope.name = name.clone();
        }
        if let Some(ref description) = request.description {
            scope.description = Some(description.clone());
        }
        scope.modified_at = Some(Utc::now());

        Ok(scope.clone())
    }

    async fn delete_scope(&self, scope_id: &str) -> Result<()> {
        self.record("delete_scope", Some(scope_id), None).await?;

        let mut scopes = self.scopes.lock().await;
        let before = scopes.len();
        scopes.retain(|s| s.id != scope_id);
        if scopes.len() == before {
            return Err(not_found("Scope", scope_id).into());
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileApi for MockPostureClient {
    async fn list_profiles(&self, params: &ListParams) -> Result<ProfileList> {
        self.record("list_profiles", None, Some(params)).await?;

        let profiles = self.profiles.lock().await.clone();
        let (page, profiles) = self
            .paginate(&profiles, params, "/posture/v2/profiles")
            .await;
        Ok(ProfileList { page, profiles })
    }

    async fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.record("get_profile", Some(profile_id), None).await?;

        self.profiles
            .lock()
            .await
            .iter()
            .find(|p| p.id == profile_id)
            .cloned()
            .ok_or_else(|| not_found("Profile", profile_id).into())
    }

    async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        self.record("delete_profile", Some(profile_id), None)
            .await?;

        let mut profiles = self.profiles.lock().await;
        let before = profiles.len();
        profiles.retain(|p| p.id != profile_id);
        if profiles.len() == before {
            return Err(not_found("Profile", profile_id).into());
        }
        Ok(())
    }

    async fn list_profile_controls(
        &self,
        profile_id: &str,
        params: &ListParams,
    ) -> Result<ControlList> {
        self.record("list_profile_controls", Some(profile_id), Some(params))
            .await?;

        let controls = self.controls.lock().await.clone();
        let path = format!("/posture/v2/profiles/{}/controls", profile_id);
        let (page, controls) = self.paginate(&controls, params, &path).await;
        Ok(ControlList { page, controls })
    }

    async fn list_group_profile_controls(
        &self,
        group_profile_id: &str,
        params: &ListParams,
    ) -> Result<ControlList> {
        self.record(
            "list_group_profile_controls",
            Some(group_profile_id),
            Some(params),
        )
        .await?;

        let controls = self.controls.lock().await.clone();
        let path = format!("/posture/v2/profiles/{}/groups/controls", group_profile_id);
        let (page, controls) = self.paginate(&controls, params, &path).await;
        Ok(ControlList { page, controls })
    }
}

#[async_trait]
impl ScanApi for MockPostureClient {
    async fn create_validation(
        &self,
        request: &CreateValidationRequest,
    ) -> Result<ValidationResponse> {
        self.record("create_validation", Some(&request.scope_id), None)
            .await?;

        Ok(ValidationResponse {
            result: true,
            message: format!(
                "Scan of scope {} against profile {} queued",
                request.scope_id, request.profile_id
            ),
        })
    }

    async fn list_latest_scans(&self, params: &ListParams) -> Result<ScanList> {
        self.record("list_latest_scans", None, Some(params)).await?;

        let scans = self.scans.lock().await.clone();
        let (page, latest_scans) = self
            .paginate(&scans, params, "/posture/v2/scans/validations/latest_scans")
            .await;
        Ok(ScanList { page, latest_scans })
    }

    async fn get_scan_summary(&self, scan_id: &str, profile_id: &str) -> Result<Summary> {
        self.record("get_scan_summary", Some(scan_id), None).await?;

        self.summaries
            .lock()
            .await
            .iter()
            .find(|s| {
                s.scan_id == scan_id && s.profile.as_ref().is_some_and(|p| p.id == profile_id)
            })
            .cloned()
            .ok_or_else(|| not_found("Scan summary", scan_id).into())
    }

    async fn list_scan_summaries(
        &self,
        scope_id: &str,
        params: &ListParams,
    ) -> Result<SummaryList> {
        self.record("list_scan_summaries", Some(scope_id), Some(params))
            .await?;

        let summaries: Vec<Summary> = self
            .summaries
            .lock()
            .await
            .iter()
            .filter(|s| s.scope_id.as_deref() == Some(scope_id))
            .cloned()
            .collect();
        let (page, summaries) = self
            .paginate(&summaries, params, "/posture/v2/scans/validations/summaries")
            .await;
        Ok(SummaryList { page, summaries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PostureApi;
    use crate::client::models::{CredentialType, ProfileRef};
    use crate::client::pagination::Paginated;
    use crate::error::{Error, PaginationError};

    fn credential(id: &str) -> Credential {
        Credential {
            id: id.to_string(),
            name: format!("Credential {}", id),
            description: None,
            credential_type: CredentialType::IbmCloud,
            enabled: true,
            purpose: None,
            display_fields: None,
            created_by: None,
            created_at: None,
            updated_by: None,
            updated_at: None,
        }
    }

    fn scan(id: &str) -> Scan {
        Scan {
            scan_id: id.to_string(),
            scan_name: None,
            scope_id: Some("scope-1".to_string()),
            scope_name: None,
            profile: None,
            group_profile_id: None,
            report_run_by: None,
            start_time: None,
            end_time: None,
            status: Some("completed".to_string()),
            result: None,
        }
    }

    fn summary(scan_id: &str, scope_id: &str, profile_id: &str) -> Summary {
        Summary {
            id: None,
            scan_id: scan_id.to_string(),
            scan_name: None,
            scope_id: Some(scope_id.to_string()),
            scope_name: None,
            profile: Some(ProfileRef {
                id: profile_id.to_string(),
                name: None,
                profile_type: None,
            }),
            report_run_by: None,
            start_time: None,
            end_time: None,
            status: None,
            result: None,
            additional_details: None,
        }
    }

    #[tokio::test]
    async fn test_list_credentials_pages() {
        let mock = MockPostureClient::new()
            .with_credentials(vec![credential("a"), credential("b"), credential("c")])
            .await;

        let first = mock
            .list_credentials(&ListParams::new().limit(2))
            .await
            .unwrap();
        assert_eq!(first.items().len(), 2);
        assert_eq!(first.page.total_count, 3);
        assert_eq!(first.next_offset().unwrap(), Some(2));

        let second = mock
            .list_credentials(&ListParams::new().limit(2).offset(2))
            .await
            .unwrap();
        assert_eq!(second.credentials[0].id, "c");
        assert_eq!(second.next_offset().unwrap(), None);
        assert!(second.page.previous.is_some());
    }

    #[tokio::test]
    async fn test_list_all_credentials_follows_next_links() {
        let mock = MockPostureClient::new()
            .with_credentials(vec![
                credential("a"),
                credential("b"),
                credential("c"),
                credential("d"),
                credential("e"),
            ])
            .await;

        let all = mock.list_all_credentials(Some(2)).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

        let requests = mock.captured_requests().await;
        let offsets: Vec<Option<i64>> = requests
            .iter()
            .map(|r| r.params.as_ref().and_then(|p| p.offset))
            .collect();
        assert_eq!(offsets, vec![None, Some(2), Some(4)]);
    }

    #[tokio::test]
    async fn test_list_all_on_empty_collection() {
        let mock = MockPostureClient::new();

        let all = mock.list_all_profiles(None).await.unwrap();
        assert!(all.is_empty());
        assert_eq!(mock.call_count("list_profiles").await, 1);
    }

    #[tokio::test]
    async fn test_list_all_stops_on_next_link_without_offset() {
        let mock = MockPostureClient::new()
            .with_scans(vec![scan("1"), scan("2"), scan("3")])
            .await
            .with_next_href("https://example.com/latest_scans?limit=1")
            .await;

        let all = mock.list_all_latest_scans(Some(1)).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(mock.call_count("list_latest_scans").await, 1);
    }

    #[tokio::test]
    async fn test_list_all_reports_malformed_offset() {
        let mock = MockPostureClient::new()
            .with_credentials(vec![credential("a"), credential("b")])
            .await
            .with_next_href("ibm.com?offset=tiger")
            .await;

        match mock.list_all_credentials(Some(1)).await {
            Err(Error::Pagination(PaginationError::MalformedOffset { value, .. })) => {
                assert_eq!(value, "tiger")
            }
            other => panic!("Expected MalformedOffset, got {:?}", other.map(|v| v.len())),
        }
    }

    #[tokio::test]
    async fn test_list_all_fails_when_next_link_repeats_offset() {
        let mock = MockPostureClient::new()
            .with_credentials(vec![credential("a"), credential("b"), credential("c")])
            .await
            .with_next_href("https://example.com/credentials?offset=0&limit=1")
            .await;

        match mock.list_all_credentials(Some(1)).await {
            Err(Error::Pagination(PaginationError::Stalled { current, next })) => {
                assert_eq!((current, next), (0, 0))
            }
            other => panic!("Expected Stalled, got {:?}", other.map(|v| v.len())),
        }
        assert_eq!(mock.call_count("list_credentials").await, 1);
    }

    #[tokio::test]
    async fn test_configured_error_is_returned_once() {
        let mock = MockPostureClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(matches!(
            mock.list_collectors().await,
            Err(Error::Api(ApiError::Unauthorized))
        ));
        assert!(mock.list_collectors().await.is_ok());
    }

    #[tokio::test]
    async fn test_credential_crud() {
        let mock = MockPostureClient::new();

        let created = mock
            .create_credential(&CreateCredentialRequest {
                name: "aws-prod".to_string(),
                credential_type: CredentialType::AwsCloud,
                enabled: true,
                description: None,
                purpose: Some("discovery_collection".to_string()),
                display_fields: serde_json::Map::new(),
            })
            .await
            .unwrap();

        let updated = mock
            .update_credential(
                &created.id,
                &UpdateCredentialRequest {
                    enabled: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.enabled);
        assert_eq!(updated.name, "aws-prod");

        mock.delete_credential(&created.id).await.unwrap();
        assert!(matches!(
            mock.get_credential(&created.id).await,
            Err(Error::Api(ApiError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_scope_summaries_filtered_by_scope() {
        let mock = MockPostureClient::new()
            .with_summaries(vec![
                summary("1", "scope-1", "p1"),
                summary("2", "scope-2", "p1"),
                summary("3", "scope-1", "p2"),
            ])
            .await;

        let list = mock
            .list_scan_summaries("scope-1", &ListParams::new())
            .await
            .unwrap();
        assert_eq!(list.summaries.len(), 2);

        let found = mock.get_scan_summary("3", "p2").await.unwrap();
        assert_eq!(found.scope_id.as_deref(), Some("scope-1"));
        assert!(mock.get_scan_summary("3", "p1").await.is_err());
    }

    #[tokio::test]
    async fn test_usable_as_dyn_posture_api() {
        let mock = MockPostureClient::new()
            .with_credentials(vec![credential("a")])
            .await;
        let api: &dyn PostureApi = &mock;

        let response = api
            .create_validation(&CreateValidationRequest {
                scope_id: "scope-1".to_string(),
                profile_id: "p1".to_string(),
                group_profile_id: None,
                name: None,
            })
            .await
            .unwrap();
        assert!(response.result);
        assert_eq!(api.list_all_credentials(None).await.unwrap().len(), 1);
    }
}
