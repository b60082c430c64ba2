//! Admin request types.

/// `users.admin.*` action names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    /// Deactivate a user
    SetInactive,
    /// Turn a guest into a full member
    SetRegular,
    /// Turn a member into a multi-channel guest
    SetRestricted,
    /// Turn a member into a single-channel guest
    SetUltraRestricted,
    /// Send an SSO binding email
    SendSsoBind,
    /// Invite someone to the workspace
    Invite,
}

impl AdminAction {
    /// Action name as it appears in the URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetInactive => "setInactive",
            Self::SetRegular => "setRegular",
            Self::SetRestricted => "setRestricted",
            Self::SetUltraRestricted => "setUltraRestricted",
            Self::SendSsoBind => "sendSSOBind",
            Self::Invite => "invite",
        }
    }
}

impl std::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of account an invitation creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InviteKind {
    /// Full member
    #[default]
    Member,
    /// Multi-channel guest
    Restricted,
    /// Single-channel guest
    UltraRestricted,
}

/// Invitation to a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteRequest {
    /// Invitee email address
    pub email: String,
    /// Invitee first name
    pub first_name: String,
    /// Invitee last name
    pub last_name: String,
    /// Channel a guest is limited to
    pub channels: Option<String>,
    /// Account kind
    pub kind: InviteKind,
}

impl InviteRequest {
    /// Create a full-member invitation
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            channels: None,
            kind: InviteKind::Member,
        }
    }

    /// Invite as a guest limited to `channel`
    pub fn guest(mut self, channel: impl Into<String>, kind: InviteKind) -> Self {
        self.channels = Some(channel.into());
        self.kind = kind;
        self
    }

    /// Form fields for this invitation
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("email".to_string(), self.email.clone()),
            ("first_name".to_string(), self.first_name.clone()),
            ("last_name".to_string(), self.last_name.clone()),
        ];

        if let Some(channels) = &self.channels {
            params.push(("channels".to_string(), channels.clone()));
        }

        match self.kind {
            InviteKind::Member => {}
            InviteKind::Restricted => {
                params.push(("restricted".to_string(), "1".to_string()));
                params.push(("resend".to_string(), "true".to_string()));
            }
            InviteKind::UltraRestricted => {
                params.push(("ultra_restricted".to_string(), "1".to_string()));
                params.push(("resend".to_string(), "true".to_string()));
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_action_names() {
        assert_eq!(AdminAction::SetInactive.as_str(), "setInactive");
        assert_eq!(AdminAction::SendSsoBind.to_string(), "sendSSOBind");
    }

    #[test]
    fn test_member_invite_params() {
        let params = InviteRequest::new("Ada", "Lovelace", "ada@example.com").to_params();
        assert_eq!(params.len(), 3);
        assert_eq!(value(&params, "email"), Some("ada@example.com"));
        assert_eq!(value(&params, "restricted"), None);
    }

    #[test]
    fn test_guest_invite_params() {
        let params = InviteRequest::new("Ada", "Lovelace", "ada@example.com")
            .guest("C123", InviteKind::UltraRestricted)
            .to_params();

        assert_eq!(value(&params, "channels"), Some("C123"));
        assert_eq!(value(&params, "ultra_restricted"), Some("1"));
        assert_eq!(value(&params, "resend"), Some("true"));
        assert_eq!(value(&params, "restricted"), None);
    }
}
