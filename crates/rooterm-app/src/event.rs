//! Application input events.
//!
//! This module defines [`AppEvent`], the closed set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize).
//! - Completion of I/O commands issued by the app.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Connection established.
    Connected,

    /// Connection could not be opened.
    ConnectFailed {
        /// Error description.
        reason: String,
    },

    /// One frame arrived.
    FrameReceived {
        /// Frame text.
        payload: String,
    },

    /// Reading from the connection failed.
    ReadFailed {
        /// Error description.
        reason: String,
    },

    /// Peer closed the connection.
    ConnectionClosed,

    /// Writing a message failed.
    SendFailed {
        /// Error description.
        reason: String,
    },

    /// Outgoing payload could not be serialized.
    EncodeFailed {
        /// Error description.
        reason: String,
    },
}
