//! Event handling for the TUI.
//!
//! Provides keyboard event polling and key classification.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::TuiResult;

/// Poll for keyboard events with a timeout.
///
/// Returns `Some(KeyEvent)` if a key was pressed within the timeout,
/// or `None` if no key was pressed. Key releases are skipped.
pub fn poll_key(timeout: Duration) -> TuiResult<Option<KeyEvent>> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(Some(key));
    }
    Ok(None)
}

/// Check if the key event is Ctrl+C, which quits from any mode.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Check if the key event represents a quit command.
///
/// Returns `true` for 'q' key or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    is_char(key, 'q') || is_interrupt(key)
}

/// Check if the key event is the plain character `c` (no Ctrl/Alt).
pub fn is_char(key: &KeyEvent, c: char) -> bool {
    typed_char(key) == Some(c)
}

/// The character typed by this key, if it is printable input.
///
/// Shift is allowed (it is part of the character); Ctrl and Alt are not.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Check if the key event is the Tab key.
pub fn is_tab(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Tab,
            ..
        }
    )
}

/// Check if the key event is the down navigation key (j or Down arrow).
pub fn is_down(key: &KeyEvent) -> bool {
    is_char(key, 'j') || key.code == KeyCode::Down
}

/// Check if the key event is the up navigation key (k or Up arrow).
pub fn is_up(key: &KeyEvent) -> bool {
    is_char(key, 'k') || key.code == KeyCode::Up
}

/// Check if the key event is the Enter key.
pub fn is_enter(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

/// Check if the key event is the Escape key.
pub fn is_escape(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if the key event is the Backspace key.
pub fn is_backspace(key: &KeyEvent) -> bool {
    key.code == KeyCode::Backspace
}

/// Check if the key event deletes a task (d or the Delete key).
pub fn is_delete(key: &KeyEvent) -> bool {
    is_char(key, 'd') || key.code == KeyCode::Delete
}

/// Check if the key event toggles completion (space or x).
pub fn is_toggle(key: &KeyEvent) -> bool {
    is_char(key, ' ') || is_char(key, 'x')
}
