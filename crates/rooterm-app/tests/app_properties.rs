//! Property-based tests for the App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.

use proptest::prelude::*;
use rooterm_app::{
    App, AppAction, AppEvent, ConnectionState, EntryKind, InputMode, KeyInput, LOG_WRAP_WIDTH,
    wrap_text,
};

/// Generate random non-terminating keys.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => any::<char>().prop_filter("printable", |c| !c.is_control()).prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
        1 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Tab),
    ]
}

/// Generate random frames: chat, suggestion offers and junk.
fn frame_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ("[a-z ]{0,12}", any::<bool>()).prop_map(|(message, is_reasoning)| {
            chat_frame(&message, is_reasoning)
        }),
        prop::collection::vec("[A-Z]{1,3}", 0..4).prop_map(|items| {
            let quoted: Vec<String> = items.iter().map(|i| format!("\"{i}\"")).collect();
            format!(r#"{{"question":"q","suggest":[{}]}}"#, quoted.join(","))
        }),
        "\\PC{0,16}",
    ]
}

fn chat_frame(message: &str, is_reasoning: bool) -> String {
    format!(r#"{{"message":"{message}","is_reasoning":{is_reasoning}}}"#)
}

#[derive(Debug, Clone)]
enum Step {
    Key(KeyInput),
    Frame(String),
    ReadFailed,
    Closed,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => key_strategy().prop_map(Step::Key),
        4 => frame_strategy().prop_map(Step::Frame),
        1 => Just(Step::ReadFailed),
        1 => Just(Step::Closed),
    ]
}

fn connected_app() -> (App, usize) {
    let mut app = App::new("ws://127.0.0.1:9421/");
    let _ = app.connect();
    let actions = app.handle(AppEvent::Connected);
    let reads = count_reads(&actions);
    (app, reads)
}

fn count_reads(actions: &[AppAction]) -> usize {
    actions.iter().filter(|a| **a == AppAction::ReadNext).count()
}

proptest! {
    #[test]
    fn prop_at_most_one_read_outstanding(steps in prop::collection::vec(step_strategy(), 0..60)) {
        let (mut app, mut outstanding) = connected_app();
        prop_assert_eq!(outstanding, 1);

        for step in steps {
            let event = match step {
                Step::Key(KeyInput::Ctrl(_)) => continue,
                Step::Key(key) => AppEvent::Key(key),
                // A driver only completes a read that was started.
                Step::Frame(_) | Step::ReadFailed | Step::Closed if outstanding == 0 => continue,
                Step::Frame(payload) => {
                    outstanding -= 1;
                    AppEvent::FrameReceived { payload }
                },
                Step::ReadFailed => {
                    outstanding -= 1;
                    AppEvent::ReadFailed { reason: "boom".into() }
                },
                Step::Closed => {
                    outstanding -= 1;
                    AppEvent::ConnectionClosed
                },
            };

            let actions = app.handle(event);
            outstanding += count_reads(&actions);

            prop_assert!(outstanding <= 1);
            if app.connection_state() == ConnectionState::Connected {
                prop_assert_eq!(outstanding, 1);
            } else {
                prop_assert_eq!(outstanding, 0);
            }
        }
    }

    #[test]
    fn prop_terminate_always_quits(
        steps in prop::collection::vec(step_strategy(), 0..30),
        alias in prop_oneof![Just('c'), Just('d')],
    ) {
        let (mut app, _) = connected_app();
        for step in steps {
            let event = match step {
                Step::Key(key) => AppEvent::Key(key),
                Step::Frame(payload) => AppEvent::FrameReceived { payload },
                Step::ReadFailed => AppEvent::ReadFailed { reason: "boom".into() },
                Step::Closed => AppEvent::ConnectionClosed,
            };
            let _ = app.handle(event);
        }

        let log_len = app.log().len();
        let mode = app.mode().clone();
        let state = app.connection_state();

        let actions = app.handle(AppEvent::Key(KeyInput::Ctrl(alias)));

        prop_assert_eq!(actions, vec![AppAction::Quit]);
        prop_assert_eq!(app.log().len(), log_len);
        prop_assert_eq!(app.mode(), &mode);
        prop_assert_eq!(app.connection_state(), state);
    }

    #[test]
    fn prop_chat_frames_log_one_entry_each(
        frames in prop::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..20)
    ) {
        let (mut app, _) = connected_app();
        let before = app.log().len();

        for (message, is_reasoning) in &frames {
            let _ = app.handle(AppEvent::FrameReceived {
                payload: chat_frame(message, *is_reasoning),
            });
        }

        let added = app.log().get(before..).unwrap_or_default();
        prop_assert_eq!(added.len(), frames.len());
        for (entry, (message, is_reasoning)) in added.iter().zip(&frames) {
            prop_assert_eq!(entry.text(), message.as_str());
            let expected = if *is_reasoning { EntryKind::Reasoning } else { EntryKind::Message };
            prop_assert_eq!(entry.kind(), expected);
        }
    }

    #[test]
    fn prop_empty_offer_keeps_free_text(question in "\\PC{0,16}") {
        let mut app = App::new("ws://127.0.0.1:9421/");

        let _ = app.offer_suggestions(question, Vec::new());

        prop_assert_eq!(app.mode(), &InputMode::FreeText);
    }

    #[test]
    fn prop_wrapped_lines_fit_width(text in "[a-z ]{0,300}", width in 1usize..100) {
        for line in wrap_text(&text, width) {
            prop_assert!(line.chars().count() <= width);
        }
    }

    #[test]
    fn prop_wrap_preserves_non_whitespace(text in "[a-zé ]{0,300}") {
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();

        let wrapped = wrap_text(&text, LOG_WRAP_WIDTH).join(" ");

        prop_assert_eq!(strip(&wrapped), strip(&text));
    }
}
