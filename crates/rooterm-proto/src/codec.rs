//! Outbound encoding.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use thiserror::Error;

use crate::OutgoingPayload;

/// Codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload could not be serialized.
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Format a timestamp as RFC3339 with second precision.
///
/// UTC is written as `Z`, other offsets as `+hh:mm`.
pub fn format_timestamp(at: DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl OutgoingPayload {
    /// Build a payload stamped with `at`.
    pub fn new(message: impl Into<String>, at: DateTime<FixedOffset>) -> Self {
        Self { message: message.into(), time: format_timestamp(at) }
    }

    /// Serialize to the JSON text sent on the wire.
    pub fn encode(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build and serialize an outgoing payload in one step.
///
/// `at` must be captured when the send is dispatched, not when the key was
/// pressed.
pub fn encode_outgoing(message: &str, at: DateTime<FixedOffset>) -> Result<String, CodecError> {
    OutgoingPayload::new(message, at).encode()
}
