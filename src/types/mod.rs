//! Common types for the Slack API.
//!
//! Every Web API reply carries the same `ok`/`error` envelope next to the
//! endpoint-specific fields. Decoding happens in two stages: the envelope
//! is checked first, and only a successful reply is decoded into the
//! payload type.

use crate::errors::{SlackError, SlackResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Envelope present on every Slack API response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackResponse {
    /// Success indicator
    pub ok: bool,
    /// Error code, set when `ok` is false
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error: String,
}

impl SlackResponse {
    /// Turn the envelope into a result, surfacing `error` on failure
    pub fn into_result(self) -> SlackResult<()> {
        if self.ok {
            Ok(())
        } else {
            Err(SlackError::from_envelope_error(&self.error))
        }
    }
}

/// Deserialize a string field, reading `null` as `""`
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a response body: envelope first, then the payload from the same value
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> SlackResult<T> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    SlackResponse::deserialize(&value)?.into_result()?;

    Ok(T::deserialize(value)?)
}
