//! Scan API trait for validations and their results

use async_trait::async_trait;

use crate::client::models::{
    CreateValidationRequest, Scan, ScanList, Summary, SummaryList, ValidationResponse,
};
use crate::client::pagination::{ListParams, Pager};
use crate::error::Result;

/// Validation scan operations for the Posture Management API
///
/// This trait covers starting a validation and exploring the results:
/// the latest scan per scope/profile, scan summaries, and summary history.
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// Queue a validation scan of a scope against a profile
    async fn create_validation(
        &self,
        request: &CreateValidationRequest,
    ) -> Result<ValidationResponse>;

    /// List one page of the latest scans
    async fn list_latest_scans(&self, params: &ListParams) -> Result<ScanList>;

    /// Get the summary of a scan for one profile
    async fn get_scan_summary(&self, scan_id: &str, profile_id: &str) -> Result<Summary>;

    /// List one page of scan summaries for a scope
    async fn list_scan_summaries(
        &self,
        scope_id: &str,
        params: &ListParams,
    ) -> Result<SummaryList>;

    /// List every latest scan, following next-page links.
    async fn list_all_latest_scans(&self, limit: Option<i64>) -> Result<Vec<Scan>> {
        let params = ListParams {
            offset: None,
            limit,
        };
        Pager::new(params, move |params: ListParams| async move {
            self.list_latest_scans(&params).await
        })
        .collect_all()
        .await
    }
}
