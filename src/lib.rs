//! postureop - client for the Posture Management REST API
//!
//! The [`client`] module holds the typed API surface: resource traits, the
//! reqwest-backed [`client::PostureClient`], and pagination helpers that
//! follow `next` links by their `offset` query parameter.

pub mod client;
pub mod config;
pub mod error;

pub use client::{PostureApi, PostureClient, next_offset};
pub use error::{Error, Result};
