//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! pointer events, and tracks the disk currently held by the player.
//!
//! Mapping pointer columns to rods is the renderer's job (it knows the layout);
//! [`DragState`] only sees the resulting rod indices.

pub mod drag;
pub mod map;

pub use tui_hanoi_types as types;

pub use drag::{DragState, Grab};
pub use map::{handle_key_event, handle_mouse_event, is_cancel, rod_key, should_quit, PointerEvent};
