//! Collector models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who operates a collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectorType {
    /// Hosted and operated by the service
    Managed,
    /// Installed on customer infrastructure
    Unmanaged,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for CollectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectorType::Managed => write!(f, "managed"),
            CollectorType::Unmanaged => write!(f, "unmanaged"),
            CollectorType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Collector resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collector {
    /// Collector ID
    pub id: String,

    /// Collector name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lifecycle status (e.g. ready_to_install, active, suspended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub collector_type: Option<CollectorType>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_version: Option<String>,

    /// Last time the collector reported in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<DateTime<Utc>>,

    /// Code used to register an unmanaged collector after installation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default)]
    pub use_private_endpoint: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// All collectors in the account (not paginated)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectorList {
    #[serde(default)]
    pub collectors: Vec<Collector>,
}

/// Request body for creating a collector
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectorRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub collector_type: CollectorType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub is_public: bool,
}

/// Request body for updating a collector. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCollectorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_private_endpoint: Option<bool>,
}
