//! Terminal-independent key events.
//!
//! The TUI converts crossterm events into [`InputKey`] so that the handler
//! layer never depends on a terminal library.

/// A key press as seen by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (shift already applied)
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
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Ctrl+C always quits regardless of focus
    pub fn is_interrupt(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_detection() {
        assert!(InputKey::CharCtrl('c').is_interrupt());
        assert!(!InputKey::Char('c').is_interrupt());
        assert!(!InputKey::Esc.is_interrupt());
    }
}
