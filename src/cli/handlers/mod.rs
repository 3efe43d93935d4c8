//! Reusable command handlers

pub mod list;

pub use list::{confirm_delete, run_list_command};
