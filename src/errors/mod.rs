//! Error types for the Slack client.
//!
//! Two families of failure reach callers: transport/decoding problems
//! raised while talking to Slack, and application-level failures carried
//! in the response envelope (`"ok": false`). Neither is retried.

use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the Slack client
#[derive(Error, Debug)]
pub enum SlackError {
    /// Slack answered with `"ok": false`; the payload is the envelope's `error` string
    #[error("{0}")]
    Api(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api(_) => "SLACK_API",
            Self::Network(_) => "SLACK_NETWORK",
            Self::Response(_) => "SLACK_RESPONSE",
            Self::Configuration(_) => "SLACK_CONFIG",
        }
    }

    /// The envelope error string, if this is an API-level failure
    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Api(code) => Some(code),
            _ => None,
        }
    }

    /// Build an API error from an envelope's `error` field
    pub fn from_envelope_error(error: &str) -> Self {
        if error.is_empty() {
            Self::Api("unknown_error".to_string())
        } else {
            Self::Api(error.to_string())
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("Token is missing")]
    MissingToken,

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Non-success HTTP status
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, as received
        body: String,
    },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(err: serde_json::Error) -> Self {
        SlackError::Response(err.into())
    }
}
