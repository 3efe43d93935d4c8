//! Credential API trait

use async_trait::async_trait;

use crate::client::models::{
    CreateCredentialRequest, Credential, CredentialList, UpdateCredentialRequest,
};
use crate::client::pagination::{ListParams, Pager};
use crate::error::Result;

/// Credential operations for the Posture Management API
///
/// Credentials hold the secrets collectors use to reach an environment.
#[async_trait]
pub trait CredentialApi: Send + Sync {
    /// Create a credential
    async fn create_credential(&self, request: &CreateCredentialRequest) -> Result<Credential>;

    /// List one page of credentials
    async fn list_credentials(&self, params: &ListParams) -> Result<CredentialList>;

    /// Get a single credential by ID
    async fn get_credential(&self, credential_id: &str) -> Result<Credential>;

    /// Update a credential. Only fields set on the request are changed.
    async fn update_credential(
        &self,
        credential_id: &str,
        request: &UpdateCredentialRequest,
    ) -> Result<Credential>;

    /// Delete a credential
    async fn delete_credential(&self, credential_id: &str) -> Result<()>;

    /// List every credential, following next-page links.
    async fn list_all_credentials(&self, limit: Option<i64>) -> Result<Vec<Credential>> {
        let params = ListParams {
            offset: None,
            limit,
        };
        Pager::new(params, move |params: ListParams| async move {
            self.list_credentials(&params).await
        })
        .collect_all()
        .await
    }
}
