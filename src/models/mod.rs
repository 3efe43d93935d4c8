//! Display models for CLI output
//!
//! Conversions from API response types into CLI-friendly display rows.

pub mod display;

pub use display::{
    CollectorDisplay, ControlDisplay, CredentialDisplay, ProfileDisplay, ScanDisplay,
    ScopeDisplay, SummaryDisplay,
};
