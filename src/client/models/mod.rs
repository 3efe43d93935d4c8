//! Posture Management API data models
//!
//! This module contains the domain types sent to and returned by the API.
//! Models are organized by resource type for easy discovery.

mod collector;
mod credential;
mod profile;
mod scan;
mod scope;

// Re-export all models for convenient access
pub use collector::{
    Collector, CollectorList, CollectorType, CreateCollectorRequest, UpdateCollectorRequest,
};
pub use credential::{
    CreateCredentialRequest, Credential, CredentialList, CredentialType, UpdateCredentialRequest,
};
pub use profile::{Control, ControlList, Goal, Profile, ProfileList, ProfileType};
pub use scan::{
    CreateValidationRequest, ProfileRef, Scan, ScanList, ScanResult, Summary, SummaryList,
    ValidationResponse,
};
pub use scope::{CreateScopeRequest, Scope, ScopeList, UpdateScopeRequest};
