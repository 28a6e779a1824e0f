//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) so the state machine can be driven from tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Character pressed with Control held (lowercase).
    Ctrl(char),
    /// Enter/Return key (confirm).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
}

impl KeyInput {
    /// Ctrl+C or Ctrl+D. Stops the loop regardless of mode.
    pub fn is_terminate(self) -> bool {
        matches!(self, Self::Ctrl('c' | 'd'))
    }
}
