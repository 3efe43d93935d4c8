//! Collector API trait

use async_trait::async_trait;

use crate::client::models::{
    Collector, CollectorList, CreateCollectorRequest, UpdateCollectorRequest,
};
use crate::error::Result;

/// Collector operations for the Posture Management API
#[async_trait]
pub trait CollectorApi: Send + Sync {
    /// Register a new collector
    async fn create_collector(&self, request: &CreateCollectorRequest) -> Result<Collector>;

    /// List all collectors in the account
    async fn list_collectors(&self) -> Result<CollectorList>;

    /// Get a single collector by ID
    async fn get_collector(&self, collector_id: &str) -> Result<Collector>;

    /// Update a collector
    async fn update_collector(
        &self,
        collector_id: &str,
        request: &UpdateCollectorRequest,
    ) -> Result<Collector>;

    /// Delete a collector
    async fn delete_collector(&self, collector_id: &str) -> Result<()>;
}
