//! Key and mouse mapping from terminal events to puzzle input.

use crate::types::{GameAction, RodIndex};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Pointer activity in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press { x: u16, y: u16 },
    Motion { x: u16, y: u16 },
    Release { x: u16, y: u16 },
}

/// Map keyboard shortcuts to game actions.
///
/// Ctrl+Z undoes the last move, R restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('z') | KeyCode::Char('Z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameAction::Undo)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Map `1`/`2`/`3` to rods for keyboard play.
pub fn rod_key(key: KeyEvent) -> Option<RodIndex> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => RodIndex::new((c as u8 - b'1') as usize),
        _ => None,
    }
}

/// Check if key drops the held disk.
pub fn is_cancel(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map left-button mouse activity to pointer events.
pub fn handle_mouse_event(event: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press { x, y }),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::Motion { x, y })
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release { x, y }),
        _ => None,
    }
}
