//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep board geometry in one place, so drawing and pointer hit-testing agree
//! - Draw disks as plain colored rectangles over a bright blue board

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hanoi_core as core;
pub use tui_hanoi_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, DragView, GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
