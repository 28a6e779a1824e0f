//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, the commands produced by the
//! [`crate::App`] state machine for the runtime to execute. I/O commands
//! resolve into exactly one [`crate::AppEvent`] fed back into the loop.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Open the connection. Resolves to `Connected` or `ConnectFailed`.
    Connect {
        /// Endpoint URL (`ws://host:port/`).
        endpoint: String,
    },

    /// Read one frame. Resolves to `FrameReceived`, `ReadFailed` or
    /// `ConnectionClosed`.
    ReadNext,

    /// Encode and write a message. Failures are reported inline.
    Send {
        /// Message text, stamped with the time at dispatch.
        message: String,
    },

    /// Drop the connection handle.
    Close,
}
