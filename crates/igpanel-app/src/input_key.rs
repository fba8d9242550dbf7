//! Terminal-independent key events
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary so the
//! app layer never depends on a terminal library. The headless runner never
//! produces keys at all.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Keys that quit from anywhere
    pub fn is_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c') | InputKey::CharCtrl('q'))
    }
}
