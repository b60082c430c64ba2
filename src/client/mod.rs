//! Slack client implementation.
//!
//! Provides the main entry point for interacting with Slack APIs.

use crate::config::{SlackConfig, SlackConfigBuilder, SlackEndpoints};
use crate::errors::SlackResult;
use crate::observability::{redact_fields, DebugSink, StdoutSink};
use crate::services::admin::AdminService;
use crate::services::auth_service::{AuthService, AuthServiceTrait, AuthTestResponse};
use crate::transport::{default_headers, FormRequest, HttpTransport, ReqwestTransport};
use crate::types::decode_response;
use serde::de::DeserializeOwned;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Slack Web API client.
///
/// Holds the token, the resolved endpoints and an optional debug sink.
/// Every operation performs exactly one HTTP request.
#[derive(Clone)]
pub struct SlackClient {
    config: Arc<SlackConfig>,
    transport: Arc<dyn HttpTransport>,
    debug: bool,
    logger: Option<Arc<dyn DebugSink>>,
}

impl SlackClient {
    /// Create a client for `token`, resolving endpoints from the environment.
    ///
    /// The token is not checked locally; a bad token surfaces as
    /// `invalid_auth` on the first call.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoints(token, SlackEndpoints::from_env())
    }

    /// Create a client for `token` against explicit endpoints
    pub fn with_endpoints(token: impl Into<String>, endpoints: SlackEndpoints) -> Self {
        let mut config = SlackConfig::new(token);
        config.endpoints = endpoints;
        Self::with_transport(config, Arc::new(ReqwestTransport::default()))
    }

    /// Create a client from a configuration
    pub fn from_config(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: SlackConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::assemble(config, transport, None)
    }

    fn assemble(
        config: SlackConfig,
        transport: Arc<dyn HttpTransport>,
        logger: Option<Arc<dyn DebugSink>>,
    ) -> Self {
        let debug = config.debug;
        let mut client = Self {
            config: Arc::new(config),
            transport,
            debug: false,
            logger,
        };
        client.set_debug(debug);
        client
    }

    /// Create a new client builder
    pub fn builder() -> SlackClientBuilder {
        SlackClientBuilder::new()
    }

    /// Switch debug mode on or off.
    ///
    /// Enabling debug mode without a logger installs a [`StdoutSink`].
    /// An existing logger is never replaced. The stored configuration's
    /// `debug` flag follows this setting.
    pub fn set_debug(&mut self, debug: bool) {
        self.set_debug_with(debug, || -> Arc<dyn DebugSink> { Arc::new(StdoutSink::stdout()) });
    }

    /// Like [`set_debug`](Self::set_debug), with `default_sink` building the
    /// sink installed when none is set yet
    pub(crate) fn set_debug_with<F>(&mut self, debug: bool, default_sink: F)
    where
        F: FnOnce() -> Arc<dyn DebugSink>,
    {
        self.debug = debug;
        if self.config.debug != debug {
            Arc::make_mut(&mut self.config).debug = debug;
        }
        if debug && self.logger.is_none() {
            self.logger = Some(default_sink());
        }
    }

    /// Install the sink used for this client's debug output
    pub fn set_logger(&mut self, logger: Arc<dyn DebugSink>) {
        self.logger = Some(logger);
    }

    /// Whether debug mode is on
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether a debug sink is installed
    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }

    /// Write a formatted debug line; a no-op unless debug mode is on
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.debug {
            self.emit(Location::caller(), &args.to_string());
        }
    }

    /// Write the space-separated items as one debug line; a no-op unless debug mode is on
    #[track_caller]
    pub fn debugln(&self, items: &[&dyn fmt::Display]) {
        if self.debug {
            let line = items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            self.emit(Location::caller(), &line);
        }
    }

    fn emit(&self, location: &'static Location<'static>, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(location, message);
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Get the resolved endpoints
    pub fn endpoints(&self) -> &SlackEndpoints {
        &self.config.endpoints
    }

    /// Get the transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get the auth service
    pub fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// Get the web-admin service
    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(self)
    }

    /// Check that the token can make authenticated requests
    pub async fn auth_test(&self) -> SlackResult<AuthTestResponse> {
        self.auth_service().test().await
    }

    /// POST `params` plus the token to an API method and decode the reply
    pub async fn post_form<T>(&self, method: &str, params: Vec<(String, String)>) -> SlackResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.config.endpoints.api_url(method);
        self.post_form_to(url, params).await
    }

    /// POST `params` plus the token to a fully-formed URL and decode the reply
    #[instrument(skip(self, params), fields(url = %url))]
    pub async fn post_form_to<T>(&self, url: String, params: Vec<(String, String)>) -> SlackResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let request = FormRequest::post(url)
            .with_headers(default_headers())
            .field("token", self.config.expose_token())
            .fields(params)
            .with_timeout(self.config.timeout);

        if self.debug {
            self.debugf(format_args!(
                "POST {} {}",
                request.url,
                redact_fields(&request.fields)
            ));
        }

        let body = self.transport.send_form(request).await?;

        if self.debug {
            self.debugln(&[&"response:", &String::from_utf8_lossy(&body)]);
        }

        decode_response(&body)
    }
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("config", &self.config)
            .field("debug", &self.debug)
            .field("has_logger", &self.logger.is_some())
            .finish()
    }
}

/// Builder for SlackClient
#[derive(Default)]
pub struct SlackClientBuilder {
    config: SlackConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Arc<dyn DebugSink>>,
}

impl SlackClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.token(token);
        self
    }

    /// Set the resolved endpoints
    pub fn endpoints(mut self, endpoints: SlackEndpoints) -> Self {
        self.config = self.config.endpoints(endpoints);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Start in debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config = self.config.debug(debug);
        self
    }

    /// Use a custom debug sink
    pub fn logger(mut self, logger: Arc<dyn DebugSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Use a custom transport
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> SlackResult<SlackClient> {
        let config = self.config.build()?;
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout)?),
        };
        Ok(SlackClient::assemble(config, transport, self.logger))
    }
}
