//! Input area
//!
//! Shows either the text editor with its cursor or the suggestion list,
//! depending on the input mode. Never both.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rooterm_app::{App, InputMode, SuggestionList, TextInput};

pub(super) const PROMPT: &str = "> ";
const PROMPT_WIDTH: u16 = 3; // left border + "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border
const BORDER_SIZE: u16 = 2;
const MAX_VISIBLE_SUGGESTIONS: u16 = 8;

/// Height the input area needs for the current mode.
pub fn height(app: &App) -> u16 {
    match app.mode() {
        InputMode::FreeText => 1 + BORDER_SIZE,
        InputMode::Suggestion(list) => {
            let rows = u16::try_from(list.items().len()).unwrap_or(u16::MAX);
            rows.min(MAX_VISIBLE_SUGGESTIONS) + BORDER_SIZE
        },
    }
}

/// Render the input area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.mode() {
        InputMode::FreeText => render_editor(frame, app.editor(), area),
        InputMode::Suggestion(list) => render_suggestions(frame, list, area),
    }
}

fn render_editor(frame: &mut Frame, editor: &TextInput, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let input_text = format!("{PROMPT}{}", editor.buffer());
    let paragraph =
        Paragraph::new(input_text).style(Style::default().fg(Color::White)).block(block);

    frame.render_widget(paragraph, area);

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor = u16::try_from(editor.cursor()).unwrap_or(u16::MAX);
    let cursor_offset = cursor.min(available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}

fn render_suggestions(frame: &mut Frame, list: &SuggestionList, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", list.question()));

    let items: Vec<ListItem> = list.items().iter().map(|item| ListItem::new(item.as_str())).collect();
    let widget = List::new(items)
        .block(block)
        .highlight_symbol(PROMPT)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(list.selected()));
    frame.render_stateful_widget(widget, area, &mut state);
}
