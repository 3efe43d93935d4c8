//! Profile and control models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::pagination::{PageMeta, Paginated};

/// Profile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    /// Shipped by the service, read-only
    Predefined,
    /// Created by the account
    Custom,
    /// Combination of other profiles
    Group,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileType::Predefined => write!(f, "predefined"),
            ProfileType::Custom => write!(f, "custom"),
            ProfileType::Group => write!(f, "group"),
            ProfileType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Profile resource: a set of controls evaluated by a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile ID
    pub id: String,

    /// Profile name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileType>,

    /// Profile this one was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_profile: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub controls_count: i64,

    /// Environments and resource kinds the profile applies to; free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicability_criteria: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// One page of profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileList {
    #[serde(flatten)]
    pub page: PageMeta,

    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Paginated for ProfileList {
    type Item = Profile;

    fn page(&self) -> &PageMeta {
        &self.page
    }

    fn items(&self) -> &[Profile] {
        &self.profiles
    }

    fn into_items(self) -> Vec<Profile> {
        self.profiles
    }
}

/// A goal checked as part of a control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// A control belonging to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    pub id: String,

    /// Control identifier in the source framework (e.g. "AC-2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_control_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// One page of controls, for a profile or a group profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlList {
    #[serde(flatten)]
    pub page: PageMeta,

    #[serde(default)]
    pub controls: Vec<Control>,
}

impl Paginated for ControlList {
    type Item = Control;

    fn page(&self) -> &PageMeta {
        &self.page
    }

    fn items(&self) -> &[Control] {
        &self.controls
    }

    fn into_items(self) -> Vec<Control> {
        self.controls
    }
}
