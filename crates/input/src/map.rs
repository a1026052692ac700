//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game action.
///
/// Letters are case-insensitive. Release events never map to anything so a
/// terminal that reports them does not move twice per keystroke.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Direction::Up,
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Direction::Left,
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Direction::Down,
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Direction::Right,
        _ => return None,
    };

    Some(GameAction::Move(direction))
}

/// Check if key should quit the game.
///
/// Raw mode swallows the usual Ctrl-C signal, so it is handled here.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
