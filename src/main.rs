//! Terminal Tower of Hanoi runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a custom framebuffer-based
//! renderer. The puzzle rules live in `tui_hanoi::core`; this loop only turns
//! input into puzzle calls and redraws.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_hanoi::cli::{self, Command, USAGE};
use tui_hanoi::core::{Puzzle, PuzzleSnapshot};
use tui_hanoi::input::{
    handle_key_event, handle_mouse_event, is_cancel, rod_key, should_quit, DragState, PointerEvent,
};
use tui_hanoi::term::{DragView, FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use tui_hanoi::transcript::Transcript;
use tui_hanoi::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match cli::parse_args(&args, cli::config_from_env())? {
        Command::Play(config) => config,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };
    let mut puzzle = Puzzle::new(config)?;
    let mut transcript = Transcript::new();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut puzzle, &mut transcript);

    // Always try to restore terminal state.
    let _ = term.exit();

    for line in transcript.lines() {
        println!("{}", line);
    }
    result
}

fn run(term: &mut TerminalRenderer, puzzle: &mut Puzzle, transcript: &mut Transcript) -> Result<()> {
    let view = GameView::default();
    let mut drag = DragState::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = PuzzleSnapshot::default();
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        puzzle.snapshot_into(&mut snap);
        let overlay = Overlay {
            drag: drag.grab().map(|g| DragView {
                from: g.from,
                pointer: g.pointer,
            }),
            transcript: transcript.tail(h as usize),
        };
        view.render_into_with_overlay(&snap, &overlay, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(tick)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if is_cancel(key) {
                    drag.cancel();
                } else if let Some(action) = handle_key_event(key) {
                    // Undo and restart change the rods under a held disk.
                    drag.cancel();
                    puzzle.apply_action(action);
                } else if let Some(rod) = rod_key(key) {
                    let has_disk = !puzzle.rod(rod).is_empty();
                    if let Some(action) = drag.select(rod, has_disk) {
                        puzzle.apply_action(action);
                    }
                }
            }
            Event::Mouse(mouse) => match handle_mouse_event(mouse) {
                Some(PointerEvent::Press { x, y }) => {
                    let rod = view.rod_at(&snap, viewport, x);
                    let has_disk = rod.is_some_and(|r| !puzzle.rod(r).is_empty());
                    drag.press(rod, has_disk, x, y);
                }
                Some(PointerEvent::Motion { x, y }) => drag.motion(x, y),
                Some(PointerEvent::Release { x, .. }) => {
                    if let Some(action) = drag.release(view.rod_at(&snap, viewport, x)) {
                        puzzle.apply_action(action);
                    }
                }
                None => {}
            },
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }

        transcript.extend(puzzle.drain_events());
    }
}
