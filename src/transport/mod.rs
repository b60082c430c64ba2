//! HTTP transport layer for the Slack client.
//!
//! Sends form-encoded POSTs and hands the raw response body back to the
//! caller. Envelope checking and payload decoding happen one layer up, in
//! [`crate::types::decode_response`].

use crate::errors::{NetworkError, SlackError, SlackResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderValue, USER_AGENT};
use http::HeaderMap;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("slack-web-client/", env!("CARGO_PKG_VERSION"));

/// Headers every client request carries
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a form-encoded request and return the response body.
    ///
    /// Fails on network errors and non-success HTTP statuses.
    async fn send_form(&self, request: FormRequest) -> SlackResult<Bytes>;
}

/// Form-encoded request
#[derive(Debug, Clone)]
pub struct FormRequest {
    /// Full request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields, in order
    pub fields: Vec<(String, String)>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderMap::new(),
            fields: Vec::new(),
            timeout: None,
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add several form fields
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Replace the request headers
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Look up the first value of a form field
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::with_client(
            Client::new(),
            Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url, field_count = request.fields.len()))]
    async fn send_form(&self, request: FormRequest) -> SlackResult<Bytes> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .form(&request.fields)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        if !status.is_success() {
            warn!(status = %status, "Request failed with non-success status");
            return Err(SlackError::Network(NetworkError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }));
        }

        debug!(status = %status, body_len = body.len(), "Received response");
        Ok(body)
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_request_builder() {
        let request = FormRequest::post("https://slack.com/api/test")
            .field("channel", "C123")
            .field("text", "Hello");

        assert_eq!(request.fields.len(), 2);
        assert_eq!(request.fields[0], ("channel".to_string(), "C123".to_string()));
        assert_eq!(request.field_value("text"), Some("Hello"));
        assert_eq!(request.field_value("missing"), None);
        assert!(request.timeout.is_none());
    }

    #[test]
    fn test_form_request_fields_extend() {
        let request = FormRequest::post("https://slack.com/api/test")
            .field("token", "xoxb-1")
            .fields([("user", "U1"), ("set_active", "true")])
            .with_timeout(Duration::from_secs(5));

        assert_eq!(request.fields.len(), 3);
        assert_eq!(request.field_value("set_active"), Some("true"));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_form_request_with_default_headers() {
        let request = FormRequest::post("https://slack.com/api/test").with_headers(default_headers());

        let agent = request.headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(agent.starts_with("slack-web-client/"));
        assert_eq!(agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_transport_new() {
        let transport = ReqwestTransport::new(Duration::from_secs(10)).unwrap();
        assert!(format!("{:?}", transport).contains("10s"));
    }
}
