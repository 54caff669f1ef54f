//! Keyboard shortcut handling.
//!
//! Letters stay free for commands in the entry view because the input
//! controls only accept numeric characters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::View;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ShowEntry,
    ShowCharts,
    NextField,
    PrevField,
    StepUp,
    StepDown,
    InputChar(char),
    Backspace,
    Submit,
    Export,
    None,
}

/// Map a key event to an action for the active view.
#[must_use]
pub fn map_key(view: View, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match view {
        View::DataEntry => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('v') => KeyAction::ShowCharts,
            KeyCode::Char('d') => KeyAction::ShowEntry,
            KeyCode::Tab => KeyAction::NextField,
            KeyCode::BackTab => KeyAction::PrevField,
            KeyCode::Up => KeyAction::StepUp,
            KeyCode::Down => KeyAction::StepDown,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                KeyAction::InputChar(c)
            }
            _ => KeyAction::None,
        },
        View::Visualization => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('d') => KeyAction::ShowEntry,
            KeyCode::Char('v') => KeyAction::ShowCharts,
            KeyCode::Char('e') => KeyAction::Export,
            _ => KeyAction::None,
        },
    }
}
