//! JSON payload types.
//!
//! Field names are part of the wire contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// Message sent by the operator.
///
/// Built fresh for every send and serialized immediately. `time` is the wall
/// clock at send time in RFC3339 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingPayload {
    /// Text typed or picked by the operator.
    pub message: String,
    /// RFC3339 timestamp, second precision.
    pub time: String,
}

/// Chat message pushed by the peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    /// Message text.
    pub message: String,
    /// Rendered de-emphasized when set. Absent means `false`.
    #[serde(default)]
    pub is_reasoning: bool,
}

/// Question with a set of suggested replies.
///
/// The candidate set is replaced wholesale on every payload; it is never
/// merged with a previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    /// Prompt shown above the candidates.
    pub question: String,
    /// Candidate replies in display order.
    pub suggest: Vec<String>,
}
