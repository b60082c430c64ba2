//! Service implementations for Slack API endpoints.
//!
//! Each service borrows a [`crate::SlackClient`] and groups the methods for
//! one category of endpoints.

pub mod admin;
pub mod auth_service;

pub use admin::AdminService;
pub use auth_service::AuthService;
