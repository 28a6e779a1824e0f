//! Fuzz target for the App state machine
//!
//! Drives an App with arbitrary sequences of keys and command completions,
//! tracking outstanding reads the way a driver would.
//!
//! # Invariants
//!
//! - At most one read is outstanding at any time
//! - Reads are only requested while connected
//! - Sends are only requested while connected
//! - The log never shrinks
//! - Terminate keys always quit

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rooterm_app::{App, AppAction, AppEvent, ConnectionState, KeyInput};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Char(char),
    Key(u8),
    Resize(u16, u16),
    Connected,
    ConnectFailed,
    Frame(FrameKind),
    ReadFailed,
    PeerClosed,
    SendFailed,
    EncodeFailed,
}

#[derive(Debug, Clone, Arbitrary)]
enum FrameKind {
    Chat { message: String, is_reasoning: bool },
    Suggestion { question: String, suggest: Vec<String> },
    Raw(String),
}

fn key(code: u8) -> KeyInput {
    match code % 14 {
        0 => KeyInput::Enter,
        1 => KeyInput::Backspace,
        2 => KeyInput::Delete,
        3 => KeyInput::Tab,
        4 => KeyInput::Esc,
        5 => KeyInput::Left,
        6 => KeyInput::Right,
        7 => KeyInput::Up,
        8 => KeyInput::Down,
        9 => KeyInput::Home,
        10 => KeyInput::End,
        11 => KeyInput::Ctrl('c'),
        12 => KeyInput::Ctrl('d'),
        _ => KeyInput::Ctrl('a'),
    }
}

fn json_string(s: &str) -> String {
    let escaped: String = s
        .chars()
        .flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
            c => vec![c],
        })
        .collect();
    format!("\"{escaped}\"")
}

fn frame(kind: &FrameKind) -> String {
    match kind {
        FrameKind::Chat { message, is_reasoning } => {
            format!(r#"{{"message":{},"is_reasoning":{is_reasoning}}}"#, json_string(message))
        },
        FrameKind::Suggestion { question, suggest } => {
            let items: Vec<String> = suggest.iter().map(|s| json_string(s)).collect();
            format!(r#"{{"question":{},"suggest":[{}]}}"#, json_string(question), items.join(","))
        },
        FrameKind::Raw(raw) => raw.clone(),
    }
}

/// Apply actions the way a driver would. Returns `true` on quit.
fn apply(app: &App, actions: Vec<AppAction>, outstanding: &mut usize) -> bool {
    let state = app.connection_state();
    for action in actions {
        match action {
            AppAction::ReadNext => {
                assert_eq!(state, ConnectionState::Connected);
                *outstanding += 1;
                assert!(*outstanding <= 1, "second read issued");
            },
            AppAction::Send { .. } => assert_eq!(state, ConnectionState::Connected),
            AppAction::Close => *outstanding = 0,
            AppAction::Quit => return true,
            AppAction::Render | AppAction::Connect { .. } => {},
        }
    }
    false
}

fuzz_target!(|ops: Vec<Op>| {
    let mut app = App::new("ws://127.0.0.1:9421/");
    let mut outstanding_reads = 0usize;

    let actions = app.connect();
    let mut connect_pending = actions.iter().any(|a| matches!(a, AppAction::Connect { .. }));
    apply(&app, actions, &mut outstanding_reads);

    for op in ops {
        let log_len = app.log().len();

        let event = match op {
            Op::Char(c) => AppEvent::Key(KeyInput::Char(c)),
            Op::Key(code) => AppEvent::Key(key(code)),
            Op::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            Op::Connected | Op::ConnectFailed if !connect_pending => continue,
            Op::Connected => {
                connect_pending = false;
                AppEvent::Connected
            },
            Op::ConnectFailed => {
                connect_pending = false;
                AppEvent::ConnectFailed { reason: "refused".into() }
            },
            // Read completions only arrive for an outstanding read.
            Op::Frame(_) | Op::ReadFailed | Op::PeerClosed if outstanding_reads == 0 => continue,
            Op::Frame(kind) => {
                outstanding_reads -= 1;
                AppEvent::FrameReceived { payload: frame(&kind) }
            },
            Op::ReadFailed => {
                outstanding_reads -= 1;
                AppEvent::ReadFailed { reason: "reset".into() }
            },
            Op::PeerClosed => {
                outstanding_reads -= 1;
                AppEvent::ConnectionClosed
            },
            Op::SendFailed => AppEvent::SendFailed { reason: "broken pipe".into() },
            Op::EncodeFailed => AppEvent::EncodeFailed { reason: "invalid payload".into() },
        };

        let terminate = matches!(&event, AppEvent::Key(k) if k.is_terminate());
        let actions = app.handle(event);
        let quit = apply(&app, actions, &mut outstanding_reads);

        assert!(app.log().len() >= log_len);
        assert_eq!(quit, terminate);
        if quit {
            return;
        }
    }
});
