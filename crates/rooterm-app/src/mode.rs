//! Input mode controller.
//!
//! Two modes share the keyboard: a single-line [`TextInput`] for free text and
//! a [`SuggestionList`] for picking one of the peer's candidate replies.
//! Transitions take the sub-state by value and hand back the updated value
//! together with whatever text was submitted.

use crate::KeyInput;

/// Single-line text editor.
///
/// The cursor is a character index into the buffer, not a byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Keys the editor does not understand leave it
    /// unchanged.
    pub fn edit(mut self, key: KeyInput) -> Self {
        let len = self.buffer.chars().count();
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                if self.cursor < len {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = (self.cursor + 1).min(len),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = len,
            KeyInput::Ctrl(_)
            | KeyInput::Enter
            | KeyInput::Tab
            | KeyInput::Esc
            | KeyInput::Up
            | KeyInput::Down => {},
        }
        self
    }

    /// Take the contents, leaving an empty editor with the cursor at start.
    pub fn take(self) -> (Self, String) {
        (Self::new(), self.buffer)
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer.char_indices().nth(char_idx).map_or(self.buffer.len(), |(i, _)| i)
    }
}

/// Selectable list of candidate replies.
///
/// Never empty: [`SuggestionList::new`] refuses an empty candidate set, so
/// there is always a highlighted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    question: String,
    items: Vec<String>,
    selected: usize,
}

impl SuggestionList {
    /// Build a list with the first item highlighted. `None` if `items` is
    /// empty.
    pub fn new(question: impl Into<String>, items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { question: question.into(), items, selected: 0 })
    }

    /// Prompt the candidates answer.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Candidates in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the highlighted candidate.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Highlighted candidate.
    pub fn selected_item(&self) -> &str {
        self.items.get(self.selected).map_or("", String::as_str)
    }

    /// Apply a navigation key. Movement clamps at both ends.
    pub fn navigate(mut self, key: KeyInput) -> Self {
        let last = self.items.len().saturating_sub(1);
        match key {
            KeyInput::Up | KeyInput::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyInput::Down | KeyInput::Char('j') => self.selected = (self.selected + 1).min(last),
            KeyInput::Home | KeyInput::Char('g') => self.selected = 0,
            KeyInput::End | KeyInput::Char('G') => self.selected = last,
            _ => {},
        }
        self
    }

    /// Consume the list, returning the highlighted candidate.
    pub fn into_selected(mut self) -> String {
        if self.selected < self.items.len() {
            self.items.swap_remove(self.selected)
        } else {
            String::new()
        }
    }
}

/// Which widget owns the keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys go to the text editor.
    #[default]
    FreeText,
    /// Keys go to the suggestion list.
    Suggestion(SuggestionList),
}

impl InputMode {
    /// Whether the suggestion list is active.
    pub fn is_suggestion(&self) -> bool {
        matches!(self, Self::Suggestion(_))
    }

    /// Switch to `Suggestion` with a fresh candidate set.
    ///
    /// An empty set is rejected and the mode is returned unchanged. A
    /// non-empty set replaces any list already shown.
    pub fn offer(self, question: impl Into<String>, candidates: Vec<String>) -> Self {
        match SuggestionList::new(question, candidates) {
            Some(list) => Self::Suggestion(list),
            None => self,
        }
    }

    /// Route a key to the active widget.
    ///
    /// Enter submits: the editor contents in `FreeText` (editor reset, mode
    /// kept), the highlighted candidate in `Suggestion` (mode back to
    /// `FreeText`, editor untouched). An empty editor submits nothing.
    pub fn handle_key(self, editor: TextInput, key: KeyInput) -> (Self, TextInput, Option<String>) {
        match (self, key) {
            (Self::FreeText, KeyInput::Enter) => {
                if editor.buffer().is_empty() {
                    return (Self::FreeText, editor, None);
                }
                let (editor, text) = editor.take();
                (Self::FreeText, editor, Some(text))
            },
            (Self::FreeText, key) => (Self::FreeText, editor.edit(key), None),
            (Self::Suggestion(list), KeyInput::Enter) => {
                (Self::FreeText, editor, Some(list.into_selected()))
            },
            (Self::Suggestion(list), key) => (Self::Suggestion(list.navigate(key)), editor, None),
        }
    }
}
