//! Mock implementations for testing.
//!
//! Provides a mock transport and a capturing debug sink.

use crate::errors::{NetworkError, ResponseError, SlackError, SlackResult};
use crate::observability::DebugSink;
use crate::transport::{FormRequest, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::panic::Location;
use std::sync::Arc;

/// Mock response configuration
#[derive(Debug)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// HTTP status code
    pub status: u16,
    /// Error to return instead
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::ok(serde_json::to_string(data).unwrap_or_default())
    }

    /// Create a successful response with raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: 200,
            error: None,
        }
    }

    /// Create an error response
    pub fn error(error: SlackError) -> Self {
        Self {
            body: String::new(),
            status: 500,
            error: Some(error),
        }
    }

    /// Create a Slack API error response
    pub fn slack_error(error_code: &str) -> Self {
        Self::ok(format!(r#"{{"ok":false,"error":"{}"}}"#, error_code))
    }

    /// Create a response with a non-success HTTP status
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            error: None,
        }
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Form fields
    pub fields: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up the first value of a form field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header value, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Mutex<VecDeque<MockResponse>>,
    /// Recorded requests
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_form(&self, request: FormRequest) -> SlackResult<Bytes> {
        let headers = request
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        self.requests.lock().push(RecordedRequest {
            url: request.url,
            headers,
            fields: request.fields,
        });

        let response = self.responses.lock().pop_front().ok_or_else(|| {
            SlackError::Response(ResponseError::UnexpectedResponse {
                message: "No mock response configured".to_string(),
            })
        })?;

        if let Some(error) = response.error {
            return Err(error);
        }

        if !(200..300).contains(&response.status) {
            return Err(SlackError::Network(NetworkError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            }));
        }

        Ok(Bytes::from(response.body))
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

/// Debug sink that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create a shareable sink
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Lines logged so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl DebugSink for MemorySink {
    fn log(&self, location: &'static Location<'static>, message: &str) {
        self.lines
            .lock()
            .push(format!("{}:{}: {}", location.file(), location.line(), message));
    }
}
