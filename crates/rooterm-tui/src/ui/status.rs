//! Status bar
//!
//! Displays connection status, endpoint and the last error.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rooterm_app::{App, ConnectionState};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.connection_state();
    let state_style = match state {
        ConnectionState::Idle | ConnectionState::Closed => Style::default().fg(Color::Gray),
        ConnectionState::Connecting => Style::default().fg(Color::Yellow),
        ConnectionState::Connected => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        },
        ConnectionState::Failed => Style::default().fg(Color::Red),
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(state.label(), state_style),
        Span::styled(format!(" | {}", app.endpoint()), Style::default().fg(Color::Gray)),
    ];
    if let Some(error) = app.last_error() {
        spans.push(Span::styled(format!(" | {error}"), Style::default().fg(Color::Red)));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
