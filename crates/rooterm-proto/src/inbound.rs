//! Inbound frame classification.
//!
//! A received frame is either one of the structured JSON shapes or free text.
//! Anything that does not decode as a known shape degrades to [`Inbound::Raw`]
//! carrying the payload untouched; decode failures are never surfaced as
//! errors.

use serde::Deserialize;
use serde_json::Value;

use crate::{ChatPayload, SuggestionPayload};

/// Classified inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Structured chat message.
    Chat(ChatPayload),
    /// Question with candidate replies.
    Suggestion(SuggestionPayload),
    /// Unstructured or malformed frame, verbatim.
    Raw(String),
}

impl Inbound {
    /// Classify the text of one frame.
    ///
    /// The suggestion shape is tried first so a frame carrying both
    /// `question`/`suggest` and `message` is treated as a suggestion.
    ///
    /// Only JSON objects are considered; arrays that would otherwise map onto
    /// the struct fields positionally are kept raw.
    pub fn classify(raw: &str) -> Self {
        let object = match serde_json::from_str::<Value>(raw) {
            Ok(value @ Value::Object(_)) => value,
            _ => return Self::Raw(raw.to_owned()),
        };

        if let Ok(suggestion) = SuggestionPayload::deserialize(&object) {
            return Self::Suggestion(suggestion);
        }
        if let Ok(chat) = ChatPayload::deserialize(&object) {
            return Self::Chat(chat);
        }
        Self::Raw(raw.to_owned())
    }
}
