//! TUI Hanoi (workspace facade crate).
//!
//! Re-exports the workspace crates under one name (`tui_hanoi::{core,input,term,types}`)
//! and holds the pieces of the binary worth testing: command-line/environment
//! configuration and the move transcript.

pub mod cli;
pub mod transcript;

pub use tui_hanoi_core as core;
pub use tui_hanoi_input as input;
pub use tui_hanoi_term as term;
pub use tui_hanoi_types as types;
