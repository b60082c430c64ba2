//! Admin service implementation.

use super::*;
use crate::client::SlackClient;
use crate::errors::SlackResult;
use crate::types::SlackResponse;
use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

/// Trait for web-admin operations.
///
/// `team` is the workspace subdomain, e.g. `acme` for `acme.slack.com`.
#[async_trait]
pub trait AdminServiceTrait: Send + Sync {
    /// Deactivate a user
    async fn disable_user(&self, team: &str, user: &str) -> SlackResult<()>;

    /// Make a guest a full member
    async fn set_regular(&self, team: &str, user: &str) -> SlackResult<()>;

    /// Make a member a multi-channel guest
    async fn set_restricted(&self, team: &str, user: &str) -> SlackResult<()>;

    /// Make a member a single-channel guest of `channel`
    async fn set_ultra_restricted(&self, team: &str, user: &str, channel: &str) -> SlackResult<()>;

    /// Send an SSO binding email to a user
    async fn send_sso_binding_email(&self, team: &str, user: &str) -> SlackResult<()>;

    /// Send an invitation
    async fn invite(&self, team: &str, request: InviteRequest) -> SlackResult<()>;

    /// Invite a full member
    async fn invite_to_team(
        &self,
        team: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackResult<()> {
        self.invite(team, InviteRequest::new(first_name, last_name, email))
            .await
    }

    /// Invite a single-channel guest
    async fn invite_guest(
        &self,
        team: &str,
        channel: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackResult<()> {
        let request = InviteRequest::new(first_name, last_name, email)
            .guest(channel, InviteKind::UltraRestricted);
        self.invite(team, request).await
    }

    /// Invite a multi-channel guest
    async fn invite_restricted(
        &self,
        team: &str,
        channel: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackResult<()> {
        let request = InviteRequest::new(first_name, last_name, email)
            .guest(channel, InviteKind::Restricted);
        self.invite(team, request).await
    }
}

/// Admin service implementation
#[derive(Debug, Clone, Copy)]
pub struct AdminService<'a> {
    client: &'a SlackClient,
}

impl<'a> AdminService<'a> {
    /// Create a new admin service
    pub fn new(client: &'a SlackClient) -> Self {
        Self { client }
    }

    async fn call(
        &self,
        team: &str,
        action: AdminAction,
        mut params: Vec<(String, String)>,
    ) -> SlackResult<()> {
        let t = Utc::now().timestamp().to_string();
        let url = self
            .client
            .endpoints()
            .web_admin_url(team, action.as_str(), &t);

        params.push(("set_active".to_string(), "true".to_string()));
        params.push(("_attempts".to_string(), "1".to_string()));

        self.client
            .post_form_to::<SlackResponse>(url, params)
            .await
            .map(|_| ())
    }
}

fn user_param(user: &str) -> Vec<(String, String)> {
    vec![("user".to_string(), user.to_string())]
}

#[async_trait]
impl<'a> AdminServiceTrait for AdminService<'a> {
    #[instrument(skip(self))]
    async fn disable_user(&self, team: &str, user: &str) -> SlackResult<()> {
        self.call(team, AdminAction::SetInactive, user_param(user))
            .await
    }

    #[instrument(skip(self))]
    async fn set_regular(&self, team: &str, user: &str) -> SlackResult<()> {
        self.call(team, AdminAction::SetRegular, user_param(user))
            .await
    }

    #[instrument(skip(self))]
    async fn set_restricted(&self, team: &str, user: &str) -> SlackResult<()> {
        self.call(team, AdminAction::SetRestricted, user_param(user))
            .await
    }

    #[instrument(skip(self))]
    async fn set_ultra_restricted(&self, team: &str, user: &str, channel: &str) -> SlackResult<()> {
        let mut params = user_param(user);
        params.push(("channel".to_string(), channel.to_string()));
        self.call(team, AdminAction::SetUltraRestricted, params)
            .await
    }

    #[instrument(skip(self))]
    async fn send_sso_binding_email(&self, team: &str, user: &str) -> SlackResult<()> {
        self.call(team, AdminAction::SendSsoBind, user_param(user))
            .await
    }

    #[instrument(skip(self, request), fields(kind = ?request.kind))]
    async fn invite(&self, team: &str, request: InviteRequest) -> SlackResult<()> {
        self.call(team, AdminAction::Invite, request.to_params())
            .await
    }
}
