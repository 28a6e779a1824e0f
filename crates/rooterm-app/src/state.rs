//! Observable session state types.
//!
//! These structures are the view model the renderer projects: connection
//! lifecycle and the append-only message log.

/// Connection lifecycle.
///
/// `Idle -> Connecting -> Connected -> {Closed, Failed}`; `Connecting` may
/// also fail directly. `Closed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Nothing attempted yet.
    Idle,
    /// Connect command outstanding.
    Connecting,
    /// Connection open, one read outstanding.
    Connected,
    /// Peer closed the connection.
    Closed,
    /// Connect or read failed.
    Failed,
}

impl ConnectionState {
    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
            Self::Closed => "Closed",
            Self::Failed => "Failed",
        }
    }
}

/// How a log entry is displayed. Fixed when the entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Peer message or raw frame, shown verbatim.
    Message,
    /// Peer reasoning, de-emphasized.
    Reasoning,
    /// Sent by the operator.
    Outgoing,
    /// Connection lifecycle notice.
    Notice,
    /// Failure description.
    Error,
}

/// One line of the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    text: String,
    kind: EntryKind,
}

impl LogEntry {
    /// Create an entry of the given kind.
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self { text: text.into(), kind }
    }

    /// Peer message shown verbatim.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Message, text)
    }

    /// De-emphasized peer reasoning.
    pub fn reasoning(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Reasoning, text)
    }

    /// Message sent by the operator.
    pub fn outgoing(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Outgoing, text)
    }

    /// Lifecycle notice.
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Notice, text)
    }

    /// Error description.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, text)
    }

    /// Entry text, without styling.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display kind.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}
