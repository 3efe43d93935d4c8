//! Credential models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::pagination::{PageMeta, Paginated};

/// Kind of environment a credential grants access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialType {
    IbmCloud,
    AwsCloud,
    AzureCloud,
    OnPremise,
    HostGroup,
    UsernamePassword,
    /// Any type this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CredentialType::IbmCloud => "ibm_cloud",
            CredentialType::AwsCloud => "aws_cloud",
            CredentialType::AzureCloud => "azure_cloud",
            CredentialType::OnPremise => "on_premise",
            CredentialType::HostGroup => "host_group",
            CredentialType::UsernamePassword => "username_password",
            CredentialType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Credential resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Credential ID
    pub id: String,

    /// Credential name
    pub name: String,

    /// Credential description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Credential type
    #[serde(rename = "type")]
    pub credential_type: CredentialType,

    /// Whether the credential can be used by collectors
    #[serde(default)]
    pub enabled: bool,

    /// What the credential is used for (e.g. discovery_collection)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Non-secret fields displayed for the credential; shape depends on the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_fields: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialList {
    #[serde(flatten)]
    pub page: PageMeta,

    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl Paginated for CredentialList {
    type Item = Credential;

    fn page(&self) -> &PageMeta {
        &self.page
    }

    fn items(&self) -> &[Credential] {
        &self.credentials
    }

    fn into_items(self) -> Vec<Credential> {
        self.credentials
    }
}

/// Request body for creating a credential
#[derive(Debug, Clone, Serialize)]
pub struct CreateCredentialRequest {
    pub name: String,

    #[serde(rename = "type")]
    pub credential_type: CredentialType,

    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Type-specific fields, including secrets such as API keys
    pub display_fields: Map<String, Value>,
}

/// Request body for updating a credential. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCredentialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_fields: Option<Map<String, Value>>,
}
