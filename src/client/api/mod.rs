//! API trait definitions split by resource
//!
//! This module organizes the Posture Management API surface into focused sub-traits:
//! - [`CredentialApi`] - Credential CRUD
//! - [`CollectorApi`] - Collector CRUD
//! - [`ScopeApi`] - Scope CRUD
//! - [`ProfileApi`] - Profiles and their controls
//! - [`ScanApi`] - Validation scans and their summaries
//!
//! The [`PostureApi`](super::PostureApi) super-trait combines all five.

mod collector;
mod credential;
mod profile;
mod scan;
mod scope;

pub use collector::CollectorApi;
pub use credential::CredentialApi;
pub use profile::ProfileApi;
pub use scan::ScanApi;
pub use scope::ScopeApi;
