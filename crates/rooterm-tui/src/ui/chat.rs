//! Chat log
//!
//! Wraps every entry at the fixed log width and keeps the newest lines in
//! view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rooterm_app::{App, EntryKind, LOG_WRAP_WIDTH, LogEntry, wrap_text};

const OUTGOING_PREFIX: &str = "> ";

/// Style for an entry kind.
fn style(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Message => Style::default(),
        EntryKind::Reasoning => Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        EntryKind::Outgoing => Style::default().fg(Color::Cyan),
        EntryKind::Notice => Style::default().fg(Color::Yellow),
        EntryKind::Error => Style::default().fg(Color::Red),
    }
}

/// Display text of an entry before wrapping.
fn display_text(entry: &LogEntry) -> String {
    match entry.kind() {
        EntryKind::Outgoing => format!("{OUTGOING_PREFIX}{}", entry.text()),
        EntryKind::Message | EntryKind::Reasoning | EntryKind::Notice | EntryKind::Error => {
            entry.text().to_owned()
        },
    }
}

/// Display rows of an entry: each embedded line wrapped on its own.
pub(super) fn wrapped_rows(entry: &LogEntry) -> Vec<String> {
    display_text(entry)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| wrap_text(line, LOG_WRAP_WIDTH))
        .collect()
}

/// All log entries wrapped and styled, oldest first.
pub fn log_lines(app: &App) -> Vec<Line<'static>> {
    app.log()
        .iter()
        .flat_map(|entry| {
            let style = style(entry.kind());
            wrapped_rows(entry).into_iter().map(move |line| Line::styled(line, style))
        })
        .collect()
}

/// The newest `height` wrapped lines.
pub fn visible_log_lines(app: &App, height: usize) -> Vec<Line<'static>> {
    let mut lines = log_lines(app);
    let skip = lines.len().saturating_sub(height);
    lines.drain(..skip);
    lines
}

/// Render the log area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines = visible_log_lines(app, area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);
}
