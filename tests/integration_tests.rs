//! Integration tests for the input -> puzzle -> view loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_hanoi::core::{Puzzle, PuzzleEvent};
use tui_hanoi::input::{handle_key_event, handle_mouse_event, rod_key, DragState, PointerEvent};
use tui_hanoi::term::{GameView, Viewport};
use tui_hanoi::transcript::Transcript;
use tui_hanoi::types::{GameAction, RodIndex};

/// Minimal stand-in for the binary's event loop.
struct Shell {
    puzzle: Puzzle,
    drag: DragState,
    view: GameView,
    viewport: Viewport,
    transcript: Transcript,
}

impl Shell {
    fn new(disks: u8) -> Self {
        Self {
            puzzle: Puzzle::with_disks(disks).unwrap(),
            drag: DragState::new(),
            view: GameView::default(),
            viewport: Viewport::new(80, 24),
            transcript: Transcript::new(),
        }
    }

    fn mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let event = MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        let snap = self.puzzle.snapshot();
        match handle_mouse_event(event) {
            Some(PointerEvent::Press { x, y }) => {
                let rod = self.view.rod_at(&snap, self.viewport, x);
                let has_disk = rod.is_some_and(|r| !self.puzzle.rod(r).is_empty());
                self.drag.press(rod, has_disk, x, y);
            }
            Some(PointerEvent::Motion { x, y }) => self.drag.motion(x, y),
            Some(PointerEvent::Release { x, .. }) => {
                if let Some(action) = self.drag.release(self.view.rod_at(&snap, self.viewport, x)) {
                    self.puzzle.apply_action(action);
                }
            }
            None => {}
        }
        self.transcript.extend(self.puzzle.drain_events());
    }

    fn drag_disk(&mut self, from: RodIndex, to: RodIndex) {
        let layout = self.view.layout(self.puzzle.disk_count(), self.viewport);
        let (fx, tx) = (layout.rod_x(from), layout.rod_x(to));
        self.mouse(MouseEventKind::Down(MouseButton::Left), fx, layout.disk_y(0));
        self.mouse(MouseEventKind::Drag(MouseButton::Left), tx, layout.lift_y());
        self.mouse(MouseEventKind::Up(MouseButton::Left), tx, layout.lift_y());
    }

    fn key(&mut self, key: KeyEvent) {
        if let Some(action) = handle_key_event(key) {
            self.drag.cancel();
            self.puzzle.apply_action(action);
        } else if let Some(rod) = rod_key(key) {
            let has_disk = !self.puzzle.rod(rod).is_empty();
            if let Some(action) = self.drag.select(rod, has_disk) {
                self.puzzle.apply_action(action);
            }
        }
        self.transcript.extend(self.puzzle.drain_events());
    }
}

#[test]
fn test_drag_and_drop_solves_puzzle() {
    let (a, b, c) = (RodIndex::START, RodIndex::SPARE, RodIndex::TARGET);
    let mut shell = Shell::new(3);
    for (from, to) in [(a, c), (a, b), (c, b), (a, c), (b, a), (b, c), (a, c)] {
        shell.drag_disk(from, to);
    }

    assert!(shell.puzzle.is_won());
    assert_eq!(shell.puzzle.move_count(), 7);
    assert_eq!(shell.transcript.len(), 8);
    assert_eq!(
        shell.transcript.lines().last().map(String::as_str),
        Some("You Win! Total moves: 7")
    );
}

#[test]
fn test_illegal_drop_changes_nothing() {
    let (a, c) = (RodIndex::START, RodIndex::TARGET);
    let mut shell = Shell::new(3);
    shell.drag_disk(a, c);
    let before = shell.puzzle.snapshot();

    // Disk 2 cannot go on disk 1.
    shell.drag_disk(a, c);
    assert_eq!(shell.puzzle.snapshot(), before);
    assert_eq!(shell.transcript.len(), 1);
    assert!(!shell.drag.is_dragging());
}

#[test]
fn test_drop_on_same_rod_is_not_a_move() {
    let mut shell = Shell::new(3);
    shell.drag_disk(RodIndex::START, RodIndex::START);
    assert_eq!(shell.puzzle.move_count(), 0);
    assert!(shell.transcript.is_empty());
}

#[test]
fn test_press_on_empty_rod_does_not_grab() {
    let mut shell = Shell::new(3);
    let layout = shell.view.layout(3, shell.viewport);
    shell.mouse(
        MouseEventKind::Down(MouseButton::Left),
        layout.rod_x(RodIndex::SPARE),
        layout.disk_y(0),
    );
    assert!(!shell.drag.is_dragging());
}

#[test]
fn test_undo_and_restart_shortcuts() {
    let mut shell = Shell::new(3);
    shell.drag_disk(RodIndex::START, RodIndex::SPARE);
    shell.drag_disk(RodIndex::START, RodIndex::TARGET);
    assert_eq!(shell.puzzle.move_count(), 2);

    shell.key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
    assert_eq!(shell.puzzle.move_count(), 1);
    assert!(shell.puzzle.rod(RodIndex::TARGET).is_empty());

    // Plain `z` does nothing.
    shell.key(KeyEvent::from(KeyCode::Char('z')));
    assert_eq!(shell.puzzle.move_count(), 1);

    shell.key(KeyEvent::from(KeyCode::Char('r')));
    assert_eq!(shell.puzzle.move_count(), 0);
    assert_eq!(shell.puzzle.rod(RodIndex::START).len(), 3);
    assert!(shell.puzzle.history().is_empty());
}

#[test]
fn test_keyboard_rod_selection_moves() {
    let mut shell = Shell::new(2);
    shell.key(KeyEvent::from(KeyCode::Char('1')));
    shell.key(KeyEvent::from(KeyCode::Char('2')));
    shell.key(KeyEvent::from(KeyCode::Char('1')));
    shell.key(KeyEvent::from(KeyCode::Char('3')));
    shell.key(KeyEvent::from(KeyCode::Char('2')));
    shell.key(KeyEvent::from(KeyCode::Char('3')));

    assert!(shell.puzzle.is_won());
    assert_eq!(shell.puzzle.move_count(), 3);
}

#[test]
fn test_restart_event_in_transcript() {
    let mut shell = Shell::new(3);
    shell.key(KeyEvent::from(KeyCode::Char('R')));
    assert_eq!(shell.transcript.lines(), &["Restarted with 3 disks.".to_string()]);
    assert_eq!(
        shell.puzzle.drain_events().next(),
        None::<PuzzleEvent>
    );
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('R'))), Some(GameAction::Restart));
}
