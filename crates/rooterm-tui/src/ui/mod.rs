//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod chat;
mod input;
mod status;
mod text;

pub use chat::{log_lines, visible_log_lines};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use rooterm_app::App;
pub use text::render_text;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const LOG_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(LOG_AREA_MIN_HEIGHT),
            Constraint::Length(input::height(app)),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [log_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, app, *log_area);
    input::render(frame, app, *input_area);
    status::render(frame, app, *status_area);
}
