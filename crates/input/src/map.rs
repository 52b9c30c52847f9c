//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to player actions.
///
/// Only `w`/`a`/`s`/`d` (either case, without Ctrl/Alt) are game keys;
/// everything else maps to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => PlayerAction::from_char(c),
        _ => None,
    }
}

/// `true` for key events that should be acted on.
///
/// Terminals reporting enhanced key events also send repeats and releases;
/// each physical press counts once.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Check if key is the terminal interrupt (Ctrl+C).
///
/// Raw mode turns the interrupt into an ordinary key event, so the game loop
/// has to honor it itself.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
