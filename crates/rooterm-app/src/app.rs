//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the whole session
//! state completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] commands for the runtime to execute. It is
//! only ever mutated by the single event loop, one event at a time.
//!
//! # Responsibilities
//!
//! - Tracks the connection lifecycle and keeps the read path a one-at-a-time
//!   pump: exactly one `ReadNext` is outstanding while connected.
//! - Classifies received frames into log entries and suggestion offers.
//! - Routes keys to the text editor or the suggestion list.

use rooterm_proto::Inbound;

use crate::{
    AppAction, AppEvent, ConnectionState, InputMode, KeyInput, LogEntry, TextInput,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a connection.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state.
    state: ConnectionState,
    /// Endpoint URL.
    endpoint: String,
    /// Append-only message log.
    log: Vec<LogEntry>,
    /// Most recent failure. `None` until something fails.
    last_error: Option<String>,
    /// Active input widget.
    mode: InputMode,
    /// Text editor. Kept while the suggestion list is shown.
    editor: TextInput,
}

impl App {
    /// Create an idle App for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            state: ConnectionState::Idle,
            endpoint: endpoint.into(),
            log: Vec::new(),
            last_error: None,
            mode: InputMode::FreeText,
            editor: TextInput::new(),
        }
    }

    /// Start connecting. Only valid from `Idle`; there is no reconnect.
    pub fn connect(&mut self) -> Vec<AppAction> {
        if self.state != ConnectionState::Idle {
            tracing::warn!("connect requested in state {:?}", self.state);
            return vec![];
        }
        self.state = ConnectionState::Connecting;
        vec![AppAction::Connect { endpoint: self.endpoint.clone() }, AppAction::Render]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(..) => vec![AppAction::Render],
            AppEvent::Connected => {
                if !self.expect_state(ConnectionState::Connecting, "Connected") {
                    return vec![];
                }
                self.state = ConnectionState::Connected;
                self.log.push(LogEntry::notice(format!("Connected to {}", self.endpoint)));
                vec![AppAction::ReadNext, AppAction::Render]
            },
            AppEvent::ConnectFailed { reason } => {
                if !self.expect_state(ConnectionState::Connecting, "ConnectFailed") {
                    return vec![];
                }
                self.state = ConnectionState::Failed;
                self.record_error(format!("Connection error: {reason}"), reason);
                vec![AppAction::Render]
            },
            AppEvent::FrameReceived { payload } => {
                if !self.expect_state(ConnectionState::Connected, "FrameReceived") {
                    return vec![];
                }
                self.apply_frame(&payload);
                vec![AppAction::ReadNext, AppAction::Render]
            },
            AppEvent::ReadFailed { reason } => {
                if !self.expect_state(ConnectionState::Connected, "ReadFailed") {
                    return vec![];
                }
                self.state = ConnectionState::Failed;
                self.record_error(format!("Read error: {reason}"), reason);
                vec![AppAction::Close, AppAction::Render]
            },
            AppEvent::ConnectionClosed => {
                if !self.expect_state(ConnectionState::Connected, "ConnectionClosed") {
                    return vec![];
                }
                self.state = ConnectionState::Closed;
                self.log.push(LogEntry::notice("Connection closed by peer"));
                vec![AppAction::Close, AppAction::Render]
            },
            AppEvent::SendFailed { reason } => {
                self.record_error(format!("Write error: {reason}"), reason);
                vec![AppAction::Render]
            },
            AppEvent::EncodeFailed { reason } => {
                self.record_error(format!("JSON marshal error: {reason}"), reason);
                vec![AppAction::Render]
            },
        }
    }

    /// Offer a set of candidate replies.
    ///
    /// Switches to the suggestion list when `candidates` is non-empty; an
    /// empty set leaves the input mode unchanged.
    pub fn offer_suggestions(
        &mut self,
        question: impl Into<String>,
        candidates: Vec<String>,
    ) -> Vec<AppAction> {
        let mode = std::mem::take(&mut self.mode);
        self.mode = mode.offer(question, candidates);
        vec![AppAction::Render]
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key.is_terminate() {
            return vec![AppAction::Quit];
        }

        let mode = std::mem::take(&mut self.mode);
        let editor = std::mem::take(&mut self.editor);
        let (mode, editor, submitted) = mode.handle_key(editor, key);
        self.mode = mode;
        self.editor = editor;

        match submitted {
            Some(message) => self.send_message(message),
            None => vec![AppAction::Render],
        }
    }

    /// Turn a submission into a `Send`, guarding against a missing
    /// connection.
    fn send_message(&mut self, message: String) -> Vec<AppAction> {
        if self.state != ConnectionState::Connected {
            self.log.push(LogEntry::error("Not connected: message not sent"));
            return vec![AppAction::Render];
        }
        self.log.push(LogEntry::outgoing(message.clone()));
        vec![AppAction::Send { message }, AppAction::Render]
    }

    /// Classify a frame and append the resulting log entries.
    fn apply_frame(&mut self, payload: &str) {
        match Inbound::classify(payload) {
            Inbound::Chat(chat) if chat.is_reasoning => {
                self.log.push(LogEntry::reasoning(chat.message));
            },
            Inbound::Chat(chat) => self.log.push(LogEntry::message(chat.message)),
            Inbound::Suggestion(suggestion) => {
                if !suggestion.question.is_empty() {
                    self.log.push(LogEntry::message(suggestion.question.clone()));
                }
                let _ = self.offer_suggestions(suggestion.question, suggestion.suggest);
            },
            Inbound::Raw(raw) => self.log.push(LogEntry::message(raw)),
        }
    }

    fn record_error(&mut self, line: String, reason: String) {
        tracing::warn!("{line}");
        self.log.push(LogEntry::error(line));
        self.last_error = Some(reason);
    }

    /// Completion events only apply in the state that issued the command.
    fn expect_state(&self, expected: ConnectionState, event: &str) -> bool {
        if self.state == expected {
            return true;
        }
        tracing::warn!("ignoring {event} in state {:?}", self.state);
        false
    }

    /// Current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Message log in insertion order.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Most recent failure. `None` if nothing failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Active input mode.
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Text editor state.
    pub fn editor(&self) -> &TextInput {
        &self.editor
    }
}
