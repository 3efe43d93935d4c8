//! Scope models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scope resource: an environment plus the credential and collectors used to scan it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scope {
    /// Scope ID
    pub id: String,

    /// Scope name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Environment kind (ibm, aws, azure, on_premise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,

    #[serde(default)]
    pub collector_ids: Vec<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// All scopes in the account (not paginated)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeList {
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

/// Request body for creating a scope
#[derive(Debug, Clone, Serialize)]
pub struct CreateScopeRequest {
    pub name: String,

    pub environment_type: String,

    pub credential_id: String,

    pub collector_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for updating a scope. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateScopeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
