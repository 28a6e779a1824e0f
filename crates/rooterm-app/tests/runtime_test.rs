//! Runtime tests against a scripted driver.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - The commands the runtime issued, in order
//! - At most one read is ever outstanding
//! - The final App state (connection, log, input mode)

use std::collections::VecDeque;

use chrono::{DateTime, FixedOffset, TimeZone};
use rooterm_app::{
    App, AppEvent, ConnectionState, Driver, EntryKind, InputMode, KeyInput, LogEntry, Runtime,
};

#[derive(Debug)]
struct ScriptError(String);

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ScriptError {}

/// What the peer does when a read is started.
enum PeerStep {
    Frame(&'static str),
    Fail(&'static str),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Connect(String),
    ReadNext,
    Send(String),
    Close,
}

/// Driver that completes commands from a script.
///
/// Completions are delivered before keys so every peer step is observed
/// before the operator acts.
struct ScriptedDriver {
    connect_result: Result<(), &'static str>,
    peer: VecDeque<PeerStep>,
    keys: VecDeque<KeyInput>,
    completions: VecDeque<AppEvent>,
    fail_sends: bool,
    commands: Vec<Command>,
    outstanding_reads: usize,
    max_outstanding_reads: usize,
    renders: usize,
    stopped: bool,
}

impl ScriptedDriver {
    fn new(peer: Vec<PeerStep>, keys: Vec<KeyInput>) -> Self {
        Self {
            connect_result: Ok(()),
            peer: peer.into(),
            keys: keys.into(),
            completions: VecDeque::new(),
            fail_sends: false,
            commands: Vec::new(),
            outstanding_reads: 0,
            max_outstanding_reads: 0,
            renders: 0,
            stopped: false,
        }
    }

    fn sent(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Send(payload) => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Driver for &mut ScriptedDriver {
    type Error = ScriptError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        if let Some(event) = self.completions.pop_front() {
            if matches!(
                event,
                AppEvent::FrameReceived { .. }
                    | AppEvent::ReadFailed { .. }
                    | AppEvent::ConnectionClosed
            ) {
                self.outstanding_reads -= 1;
            }
            return Ok(Some(event));
        }
        Ok(self.keys.pop_front().map(AppEvent::Key))
    }

    fn connect(&mut self, endpoint: &str) {
        self.commands.push(Command::Connect(endpoint.to_owned()));
        let event = match self.connect_result {
            Ok(()) => AppEvent::Connected,
            Err(reason) => AppEvent::ConnectFailed { reason: reason.into() },
        };
        self.completions.push_back(event);
    }

    fn read_next(&mut self) {
        self.commands.push(Command::ReadNext);
        self.outstanding_reads += 1;
        self.max_outstanding_reads = self.max_outstanding_reads.max(self.outstanding_reads);

        let event = match self.peer.pop_front() {
            Some(PeerStep::Frame(text)) => AppEvent::FrameReceived { payload: text.into() },
            Some(PeerStep::Fail(reason)) => AppEvent::ReadFailed { reason: reason.into() },
            Some(PeerStep::Close) => AppEvent::ConnectionClosed,
            // Read stays blocked until the loop stops.
            None => return,
        };
        self.completions.push_back(event);
    }

    async fn send(&mut self, payload: String) -> Result<(), Self::Error> {
        if self.fail_sends {
            return Err(ScriptError("broken pipe".into()));
        }
        self.commands.push(Command::Send(payload));
        Ok(())
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }

    fn now(&self) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .and_then(|utc| utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).single())
            .unwrap()
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        self.renders += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

async fn run(driver: &mut ScriptedDriver) -> App {
    Runtime::new(driver, "ws://127.0.0.1:9421/").run().await.unwrap()
}

fn chars(text: &str) -> Vec<KeyInput> {
    text.chars().map(KeyInput::Char).collect()
}

#[tokio::test]
async fn session_reads_frames_in_order_and_sends_choices() {
    let peer = vec![
        PeerStep::Frame(r#"{"message":"thinking","is_reasoning":true}"#),
        PeerStep::Frame("plain text"),
        PeerStep::Frame(r#"{"question":"Continue?","suggest":["Yes","No"]}"#),
    ];
    let mut keys = vec![KeyInput::Down, KeyInput::Enter];
    keys.extend(chars("hi"));
    keys.push(KeyInput::Enter);
    keys.push(KeyInput::Ctrl('c'));
    let mut driver = ScriptedDriver::new(peer, keys);

    let app = run(&mut driver).await;

    assert_eq!(driver.sent(), vec![
        r#"{"message":"No","time":"2024-01-02T15:04:05Z"}"#.to_string(),
        r#"{"message":"hi","time":"2024-01-02T15:04:05Z"}"#.to_string(),
    ]);
    assert_eq!(driver.max_outstanding_reads, 1);
    assert_eq!(driver.commands.iter().filter(|c| **c == Command::ReadNext).count(), 4);
    assert!(driver.stopped);

    assert_eq!(app.connection_state(), ConnectionState::Connected);
    assert_eq!(app.mode(), &InputMode::FreeText);
    assert_eq!(app.log(), [
        LogEntry::notice("Connected to ws://127.0.0.1:9421/"),
        LogEntry::reasoning("thinking"),
        LogEntry::message("plain text"),
        LogEntry::message("Continue?"),
        LogEntry::outgoing("No"),
        LogEntry::outgoing("hi"),
    ]);
}

#[tokio::test]
async fn connect_failure_never_reads() {
    let mut driver = ScriptedDriver::new(vec![], chars("hello"));
    driver.connect_result = Err("connection refused");
    driver.keys.push_back(KeyInput::Enter);

    let app = run(&mut driver).await;

    assert_eq!(driver.commands, vec![Command::Connect("ws://127.0.0.1:9421/".into())]);
    assert_eq!(app.connection_state(), ConnectionState::Failed);
    assert_eq!(app.log().first(), Some(&LogEntry::error("Connection error: connection refused")));
    assert_eq!(app.log().last(), Some(&LogEntry::error("Not connected: message not sent")));
}

#[tokio::test]
async fn read_failure_closes_handle() {
    let mut driver = ScriptedDriver::new(vec![PeerStep::Fail("reset by peer")], vec![]);

    let app = run(&mut driver).await;

    assert_eq!(driver.commands, vec![
        Command::Connect("ws://127.0.0.1:9421/".into()),
        Command::ReadNext,
        Command::Close,
    ]);
    assert_eq!(app.connection_state(), ConnectionState::Failed);
    assert_eq!(app.last_error(), Some("reset by peer"));
}

#[tokio::test]
async fn peer_close_ends_read_pump() {
    let mut driver =
        ScriptedDriver::new(vec![PeerStep::Frame("bye"), PeerStep::Close], vec![]);

    let app = run(&mut driver).await;

    assert_eq!(driver.commands.last(), Some(&Command::Close));
    assert_eq!(app.connection_state(), ConnectionState::Closed);
}

#[tokio::test]
async fn send_failure_is_logged_and_loop_continues() {
    let mut keys = chars("a");
    keys.push(KeyInput::Enter);
    keys.extend(chars("b"));
    let mut driver = ScriptedDriver::new(vec![], keys);
    driver.fail_sends = true;

    let app = run(&mut driver).await;

    assert_eq!(app.connection_state(), ConnectionState::Connected);
    assert_eq!(app.log().last(), Some(&LogEntry::error("Write error: broken pipe")));
    assert_eq!(app.editor().buffer(), "b");
}

#[tokio::test]
async fn terminate_stops_with_read_outstanding() {
    let mut driver = ScriptedDriver::new(vec![], vec![KeyInput::Ctrl('d'), KeyInput::Char('x')]);

    let app = run(&mut driver).await;

    assert!(driver.stopped);
    assert_eq!(driver.outstanding_reads, 1);
    assert_eq!(driver.keys.len(), 1);
    assert!(app.log().iter().all(|entry| entry.kind() != EntryKind::Error));
}
