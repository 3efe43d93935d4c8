//! Scan and validation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::pagination::{PageMeta, Paginated};
use crate::client::models::ProfileType;

/// Request body to start a validation scan
#[derive(Debug, Clone, Serialize)]
pub struct CreateValidationRequest {
    pub scope_id: String,

    pub profile_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_profile_id: Option<String>,

    /// Display name for the scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Acknowledgement returned when a scan is queued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the request was accepted
    #[serde(default)]
    pub result: bool,

    #[serde(default)]
    pub message: String,
}

/// Reference to the profile a scan ran against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRef {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileType>,
}

/// Aggregated goal and control outcomes of a scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default)]
    pub goals_pass_count: i64,

    #[serde(default)]
    pub goals_fail_count: i64,

    #[serde(default)]
    pub goals_unable_to_perform_count: i64,

    #[serde(default)]
    pub goals_not_applicable_count: i64,

    #[serde(default)]
    pub controls_pass_count: i64,

    #[serde(default)]
    pub controls_fail_count: i64,

    #[serde(default)]
    pub controls_total_count: i64,
}

impl ScanResult {
    /// Percentage of evaluated goals that passed, if any were evaluated.
    pub fn goal_pass_rate(&self) -> Option<f64> {
        let evaluated = self.goals_pass_count + self.goals_fail_count;
        if evaluated == 0 {
            return None;
        }
        Some(self.goals_pass_count as f64 * 100.0 / evaluated as f64)
    }
}

/// Latest scan for a scope/profile pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    pub scan_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_profile_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_run_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Scan status (e.g. in_progress, completed, failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ScanResult>,
}

/// One page of latest scans
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanList {
    #[serde(flatten)]
    pub page: PageMeta,

    #[serde(default)]
    pub latest_scans: Vec<Scan>,
}

impl Paginated for ScanList {
    type Item = Scan;

    fn page(&self) -> &PageMeta {
        &self.page
    }

    fn items(&self) -> &[Scan] {
        &self.latest_scans
    }

    fn into_items(self) -> Vec<Scan> {
        self.latest_scans
    }
}

/// Detailed outcome of one scan against one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Summary ID; some endpoints only return the scan ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub scan_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_run_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ScanResult>,

    /// Service-specific extra data; kept as raw JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<Value>,
}

/// One page of scan summaries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryList {
    #[serde(flatten)]
    pub page: PageMeta,

    #[serde(default)]
    pub summaries: Vec<Summary>,
}

impl Paginated for SummaryList {
    type Item = Summary;

    fn page(&self) -> &PageMeta {
        &self.page
    }

    fn items(&self) -> &[Summary] {
        &self.summaries
    }

    fn into_items(self) -> Vec<Summary> {
        self.summaries
    }
}
