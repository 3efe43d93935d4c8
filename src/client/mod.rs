//! Posture Management API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod posture;

pub use api::{CollectorApi, CredentialApi, ProfileApi, ScanApi, ScopeApi};
#[cfg(test)]
pub use mock::MockPostureClient;
pub use pagination::{
    DEFAULT_PAGE_SIZE, ListParams, MAX_PAGE_SIZE, PageLink, PageMeta, Paginated, Pager,
    next_offset,
};
pub use posture::{ClientConfig, DEFAULT_SERVICE_URL, PostureClient};

/// Full Posture Management API surface
///
/// Implemented for every type that implements all resource traits, so
/// callers can take `&dyn PostureApi` or `impl PostureApi`.
pub trait PostureApi: CredentialApi + CollectorApi + ScopeApi + ProfileApi + ScanApi {}

impl<T> PostureApi for T where T: CredentialApi + CollectorApi + ScopeApi + ProfileApi + ScanApi {}
