//! Display model implementations for table and JSON output
//!
//! Display models flatten API response types into the columns the CLI shows.

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{
    Collector, Control, Credential, Profile, Scan, ScanResult, Scope, Summary,
};
use crate::output::formatters::{format_datetime, format_percent, or_dash, truncate};

const DESCRIPTION_WIDTH: usize = 60;

/// Credential display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CredentialDisplay {
    #[tabled(rename = "CREDENTIAL ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub credential_type: String,

    #[tabled(rename = "ENABLED")]
    pub enabled: bool,

    #[tabled(rename = "PURPOSE")]
    pub purpose: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl From<Credential> for CredentialDisplay {
    fn from(credential: Credential) -> Self {
        Self::from(&credential)
    }
}

impl From<&Credential> for CredentialDisplay {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.clone(),
            name: credential.name.clone(),
            credential_type: credential.credential_type.to_string(),
            enabled: credential.enabled,
            purpose: or_dash(credential.purpose.as_deref()),
            updated: format_datetime(
                credential
                    .updated_at
                    .as_ref()
                    .or(credential.created_at.as_ref()),
            ),
        }
    }
}

/// Collector display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CollectorDisplay {
    #[tabled(rename = "COLLECTOR ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub collector_type: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "LAST HEARTBEAT")]
    pub last_heartbeat: String,
}

impl From<Collector> for CollectorDisplay {
    fn from(collector: Collector) -> Self {
        Self::from(&collector)
    }
}

impl From<&Collector> for CollectorDisplay {
    fn from(collector: &Collector) -> Self {
        Self {
            id: collector.id.clone(),
            name: collector
                .display_name
                .clone()
                .unwrap_or_else(|| collector.name.clone()),
            collector_type: collector
                .collector_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: or_dash(collector.status.as_deref()),
            last_heartbeat: format_datetime(collector.last_heartbeat.as_ref()),
        }
    }
}

/// Scope display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScopeDisplay {
    #[tabled(rename = "SCOPE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ENVIRONMENT")]
    pub environment: String,

    #[tabled(rename = "CREDENTIAL")]
    pub credential_id: String,

    #[tabled(rename = "COLLECTORS")]
    pub collectors: usize,
}

impl From<Scope> for ScopeDisplay {
    fn from(scope: Scope) -> Self {
        Self::from(&scope)
    }
}

impl From<&Scope> for ScopeDisplay {
    fn from(scope: &Scope) -> Self {
        Self {
            id: scope.id.clone(),
            name: scope.name.clone(),
            environment: or_dash(scope.environment_type.as_deref()),
            credential_id: or_dash(scope.credential_id.as_deref()),
            collectors: scope.collector_ids.len(),
        }
    }
}

/// Profile display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfileDisplay {
    #[tabled(rename = "PROFILE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub profile_type: String,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "CONTROLS")]
    pub controls: i64,
}

impl From<Profile> for ProfileDisplay {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl From<&Profile> for ProfileDisplay {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            profile_type: profile
                .profile_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            version: profile
                .version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            controls: profile.controls_count,
        }
    }
}

/// Control display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ControlDisplay {
    #[tabled(rename = "CONTROL ID")]
    pub id: String,

    #[tabled(rename = "EXTERNAL ID")]
    pub external_id: String,

    #[tabled(rename = "GOALS")]
    pub goals: usize,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Control> for ControlDisplay {
    fn from(control: Control) -> Self {
        Self {
            id: control.id,
            external_id: or_dash(control.external_control_id.as_deref()),
            goals: control.goals.len(),
            description: truncate(
                control.description.as_deref().unwrap_or("-"),
                DESCRIPTION_WIDTH,
            ),
        }
    }
}

/// Latest scan display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanDisplay {
    #[tabled(rename = "SCAN ID")]
    pub scan_id: String,

    #[tabled(rename = "SCOPE")]
    pub scope: String,

    #[tabled(rename = "PROFILE")]
    pub profile: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "GOALS PASSED")]
    pub pass_rate: String,

    #[tabled(rename = "FINISHED")]
    pub finished: String,
}

impl From<Scan> for ScanDisplay {
    fn from(scan: Scan) -> Self {
        Self {
            scope: scan
                .scope_name
                .or(scan.scope_id)
                .unwrap_or_else(|| "-".to_string()),
            profile: scan
                .profile
                .map(|p| p.name.unwrap_or(p.id))
                .unwrap_or_else(|| "-".to_string()),
            status: or_dash(scan.status.as_deref()),
            pass_rate: pass_rate(scan.result.as_ref()),
            finished: format_datetime(scan.end_time.as_ref()),
            scan_id: scan.scan_id,
        }
    }
}

/// Scan summary display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SummaryDisplay {
    #[tabled(rename = "SCAN ID")]
    pub scan_id: String,

    #[tabled(rename = "PROFILE")]
    pub profile: String,

    #[tabled(rename = "CONTROLS PASSED")]
    pub controls: String,

    #[tabled(rename = "GOALS PASSED")]
    pub pass_rate: String,

    #[tabled(rename = "STARTED")]
    pub started: String,
}

impl From<Summary> for SummaryDisplay {
    fn from(summary: Summary) -> Self {
        Self::from(&summary)
    }
}

impl From<&Summary> for SummaryDisplay {
    fn from(summary: &Summary) -> Self {
        Self {
            scan_id: summary.scan_id.clone(),
            profile: summary
                .profile
                .as_ref()
                .map(|p| p.name.clone().unwrap_or_else(|| p.id.clone()))
                .unwrap_or_else(|| "-".to_string()),
            controls: summary
                .result
                .as_ref()
                .map(|r| format!("{}/{}", r.controls_pass_count, r.controls_total_count))
                .unwrap_or_else(|| "-".to_string()),
            pass_rate: pass_rate(summary.result.as_ref()),
            started: format_datetime(summary.start_time.as_ref()),
        }
    }
}

fn pass_rate(result: Option<&ScanResult>) -> String {
    format_percent(result.and_then(ScanResult::goal_pass_rate))
}
