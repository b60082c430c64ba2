//! Test fixtures for Slack API responses.
//!
//! Provides realistic test data for unit tests.

use crate::services::auth_service::AuthTestResponse;
use serde_json::{json, Value};

/// Successful `auth.test` payload
pub fn auth_test() -> AuthTestResponse {
    AuthTestResponse {
        url: "https://acme.slack.com/".to_string(),
        team: "Acme".to_string(),
        user: "alice".to_string(),
        team_id: "T1".to_string(),
        user_id: "U1".to_string(),
    }
}

/// Successful `auth.test` reply body
pub fn auth_test_json() -> Value {
    json!({
        "ok": true,
        "url": "https://acme.slack.com/",
        "team": "Acme",
        "user": "alice",
        "team_id": "T1",
        "user_id": "U1"
    })
}

/// Failed reply body carrying `error`
pub fn error_json(error: &str) -> Value {
    json!({
        "ok": false,
        "error": error
    })
}

/// Bare success envelope, as returned by the web-admin endpoints
pub fn ok_json() -> Value {
    json!({ "ok": true })
}
