//! Auth service for Slack API.
//!
//! Provides authentication testing.

use crate::client::SlackClient;
use crate::errors::SlackResult;
use crate::types::null_as_empty;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Payload of a successful `auth.test` reply.
///
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthTestResponse {
    /// URL of the workspace
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
    /// Team name
    #[serde(deserialize_with = "null_as_empty")]
    pub team: String,
    /// User name
    #[serde(deserialize_with = "null_as_empty")]
    pub user: String,
    /// Team ID
    #[serde(deserialize_with = "null_as_empty")]
    pub team_id: String,
    /// User ID
    #[serde(deserialize_with = "null_as_empty")]
    pub user_id: String,
}

/// Trait for auth service operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Test authentication
    async fn test(&self) -> SlackResult<AuthTestResponse>;
}

/// Auth service implementation
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a SlackClient,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(client: &'a SlackClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<'a> AuthServiceTrait for AuthService<'a> {
    #[instrument(skip(self))]
    async fn test(&self) -> SlackResult<AuthTestResponse> {
        self.client.post_form("auth.test", Vec::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::decode_response;

    #[test]
    fn test_missing_field_decodes_empty() {
        let auth: AuthTestResponse = decode_response(
            br#"{"ok":true,"user":"alice","team":"Acme","team_id":"T1","user_id":"U1"}"#,
        )
        .unwrap();
        assert_eq!(auth.url, "");
        assert_eq!(auth.user, "alice");
        assert_eq!(auth.team_id, "T1");
    }

    #[test]
    fn test_null_field_decodes_empty() {
        let auth: AuthTestResponse =
            decode_response(br#"{"ok":true,"url":null,"team":"Acme","user":null}"#).unwrap();
        assert_eq!(auth.url, "");
        assert_eq!(auth.user, "");
        assert_eq!(auth.team, "Acme");
        assert_eq!(auth.user_id, "");
    }
}
