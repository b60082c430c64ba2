//! Configuration management for the Slack client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, SlackResult};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Environment variable overriding the Slack host
pub const HOST_ENV: &str = "SLACK_HOST";

/// Environment variable overriding the URL scheme
pub const SCHEME_ENV: &str = "SLACK_SCHEME";

/// Host used when no override is present
pub const DEFAULT_HOST: &str = "slack.com";

/// Scheme used when no override is present
pub const DEFAULT_SCHEME: &str = "https";

/// Template for the undocumented `users.admin.*` endpoints
pub const WEB_ADMIN_TEMPLATE: &str = "https://{subdomain}.slack.com/api/users.admin.{action}?t={t}";

/// Resolved base URLs used by every request.
///
/// Built once by the embedding application and handed to the client.
/// `api_base` and `websocket_referer` always share scheme and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackEndpoints {
    api_base: String,
    websocket_referer: String,
    web_admin_template: String,
}

impl SlackEndpoints {
    /// Resolve endpoints from optional host and scheme overrides.
    ///
    /// `None` and empty strings fall back to [`DEFAULT_HOST`] and
    /// [`DEFAULT_SCHEME`]. Overrides are used as-is, without validation.
    pub fn resolve(host: Option<&str>, scheme: Option<&str>) -> Self {
        let host = host.filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
        let scheme = scheme.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SCHEME);

        Self {
            api_base: format!("{}://{}/api/", scheme, host),
            websocket_referer: format!("{}://{}", scheme, host),
            web_admin_template: WEB_ADMIN_TEMPLATE.to_string(),
        }
    }

    /// Resolve endpoints from `SLACK_HOST` and `SLACK_SCHEME`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve endpoints using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV);
        let scheme = lookup(SCHEME_ENV);
        Self::resolve(host.as_deref(), scheme.as_deref())
    }

    /// Replace the web-admin URL template.
    ///
    /// The template may contain `{subdomain}`, `{action}` and `{t}` placeholders.
    pub fn with_web_admin_template(mut self, template: impl Into<String>) -> Self {
        self.web_admin_template = template.into();
        self
    }

    /// API base URL, `<scheme>://<host>/api/`
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Referer base URL for websocket connections, `<scheme>://<host>`
    pub fn websocket_referer(&self) -> &str {
        &self.websocket_referer
    }

    /// Web-admin URL template
    pub fn web_admin_template(&self) -> &str {
        &self.web_admin_template
    }

    /// Build the full URL for an API method
    pub fn api_url(&self, method: &str) -> String {
        format!("{}{}", self.api_base, method.trim_start_matches('/'))
    }

    /// Build a `users.admin.<action>` URL for a workspace subdomain
    pub fn web_admin_url(&self, subdomain: &str, action: &str, t: &str) -> String {
        self.web_admin_template
            .replace("{subdomain}", subdomain)
            .replace("{action}", action)
            .replace("{t}", t)
    }
}

impl Default for SlackEndpoints {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Configuration for the Slack client
#[derive(Clone)]
pub struct SlackConfig {
    /// Token sent with every request; never validated locally
    pub(crate) token: SecretString,
    /// Resolved base URLs
    pub endpoints: SlackEndpoints,
    /// Request timeout
    pub timeout: Duration,
    /// Start in debug mode
    pub debug: bool,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &"[REDACTED]")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

impl SlackConfig {
    /// Create a configuration for a token with default settings
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            endpoints: SlackEndpoints::default(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SlackConfigBuilder {
        SlackConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> SlackResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Reads `SLACK_TOKEN`, `SLACK_HOST`, `SLACK_SCHEME`, `SLACK_TIMEOUT`
    /// and `SLACK_DEBUG`. Unparseable optional values are ignored.
    pub fn from_lookup<F>(lookup: F) -> SlackResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = SlackConfigBuilder::new().endpoints(SlackEndpoints::from_lookup(&lookup));

        if let Some(token) = lookup("SLACK_TOKEN") {
            builder = builder.token(token);
        }

        if let Some(timeout) = lookup("SLACK_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        if let Some(debug) = lookup("SLACK_DEBUG") {
            builder = builder.debug(matches!(debug.as_str(), "1" | "true" | "TRUE" | "yes"));
        }

        builder.build()
    }

    /// Expose the token for use in requests
    pub(crate) fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Builder for SlackConfig
#[derive(Default)]
pub struct SlackConfigBuilder {
    token: Option<SecretString>,
    endpoints: Option<SlackEndpoints>,
    timeout: Option<Duration>,
    debug: bool,
}

impl SlackConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the resolved endpoints
    pub fn endpoints(mut self, endpoints: SlackEndpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Point the client at an explicit base URL such as `http://localhost:8080/`.
    ///
    /// Unlike environment resolution, this is validated. A path prefix is
    /// kept, so `http://proxy/slack/` calls `http://proxy/slack/api/<method>`.
    pub fn api_base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        let parsed = Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
            message: format!("Invalid URL: {}", e),
        })?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(ConfigurationError::InvalidConfiguration {
                    message: format!("URL has no host: {}", url),
                })
            }
        };
        let prefix = parsed.path().trim_end_matches('/');
        let authority = format!("{}{}", host, prefix);
        self.endpoints = Some(SlackEndpoints::resolve(
            Some(&authority),
            Some(parsed.scheme()),
        ));
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Start the client in debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SlackResult<SlackConfig> {
        let token = self
            .token
            .filter(|t| !t.expose_secret().is_empty())
            .ok_or(ConfigurationError::MissingToken)?;

        Ok(SlackConfig {
            token,
            endpoints: self.endpoints.unwrap_or_default(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS)),
            debug: self.debug,
        })
    }
}
