//! Wire protocol for rooterm
//!
//! JSON payload shapes exchanged with the chat endpoint, the outbound encoder
//! and the inbound frame classifier. Transport framing is not handled here;
//! every function works on the text of a single frame.
//!
//! # Components
//!
//! - [`OutgoingPayload`]: what the operator sends (`message` + `time`)
//! - [`ChatPayload`]: a chat message from the peer, optionally flagged as
//!   reasoning
//! - [`SuggestionPayload`]: a question with candidate replies
//! - [`Inbound`]: classification of a received frame

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod inbound;
mod payload;

pub use codec::{CodecError, encode_outgoing, format_timestamp};
pub use inbound::Inbound;
pub use payload::{ChatPayload, OutgoingPayload, SuggestionPayload};
