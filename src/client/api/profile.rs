//! Profile API trait

use async_trait::async_trait;

use crate::client::models::{ControlList, Profile, ProfileList};
use crate::client::pagination::{ListParams, Pager};
use crate::error::Result;

/// Profile operations for the Posture Management API
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// List one page of profiles
    async fn list_profiles(&self, params: &ListParams) -> Result<ProfileList>;

    /// Get a single profile by ID
    async fn get_profile(&self, profile_id: &str) -> Result<Profile>;

    /// Delete a custom profile. Predefined profiles cannot be deleted.
    async fn delete_profile(&self, profile_id: &str) -> Result<()>;

    /// List one page of the controls in a profile
    async fn list_profile_controls(
        &self,
        profile_id: &str,
        params: &ListParams,
    ) -> Result<ControlList>;

    /// List one page of the controls in a group profile
    ///
    /// Group profiles combine other profiles; the controls returned are the
    /// union of their members' controls.
    async fn list_group_profile_controls(
        &self,
        group_profile_id: &str,
        params: &ListParams,
    ) -> Result<ControlList>;

    /// List every profile, following next-page links.
    async fn list_all_profiles(&self, limit: Option<i64>) -> Result<Vec<Profile>> {
        let params = ListParams {
            offset: None,
            limit,
        };
        Pager::new(params, move |params: ListParams| async move {
            self.list_profiles(&params).await
        })
        .collect_all()
        .await
    }
}
