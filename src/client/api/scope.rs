//! Scope API trait

use async_trait::async_trait;

use crate::client::models::{CreateScopeRequest, Scope, ScopeList, UpdateScopeRequest};
use crate::error::Result;

/// Scope operations for the Posture Management API
///
/// A scope ties an environment to the credential and collectors used to scan it.
#[async_trait]
pub trait ScopeApi: Send + Sync {
    /// Create a scope
    async fn create_scope(&self, request: &CreateScopeRequest) -> Result<Scope>;

    /// List all scopes in the account
    async fn list_scopes(&self) -> Result<ScopeList>;

    /// Get a single scope by ID
    async fn get_scope(&self, scope_id: &str) -> Result<Scope>;

    /// Update a scope's name or description
    async fn update_scope(&self, scope_id: &str, request: &UpdateScopeRequest) -> Result<Scope>;

    /// Delete a scope
    async fn delete_scope(&self, scope_id: &str) -> Result<()>;
}
