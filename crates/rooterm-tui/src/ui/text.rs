//! Plain-text frame
//!
//! Projects the session into a single string: the wrapped log, a blank line,
//! then the active input widget. Used for snapshots and non-interactive
//! output.

use std::fmt::Write;

use rooterm_app::{App, InputMode};

use super::{chat::wrapped_rows, input::PROMPT};

/// Render the whole session as text.
pub fn render_text(app: &App) -> String {
    let mut out = String::new();
    for entry in app.log() {
        for line in wrapped_rows(entry) {
            let _ = writeln!(out, "{line}");
        }
    }

    out.push('\n');
    match app.mode() {
        InputMode::FreeText => {
            let _ = writeln!(out, "{PROMPT}{}", app.editor().buffer());
        },
        InputMode::Suggestion(list) => {
            let _ = writeln!(out, "{}", list.question());
            for (idx, item) in list.items().iter().enumerate() {
                let marker = if idx == list.selected() { PROMPT } else { "  " };
                let _ = writeln!(out, "{marker}{item}");
            }
        },
    }
    out
}
