//! Web-admin service for Slack.
//!
//! Wraps the undocumented `users.admin.*` endpoints served from a
//! workspace subdomain rather than the API host.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
