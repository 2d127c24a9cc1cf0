//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the three-rod disk-transfer puzzle
//! (Tower of Hanoi): which moves are legal, how they are recorded and reversed,
//! and when the puzzle is won. It has **zero dependencies** on UI or I/O.
//!
//! # Module Structure
//!
//! - [`rod`]: fixed-capacity disk stack enforcing the stacking rule
//! - [`history`]: bounded undo log that drops (never evicts) once full
//! - [`config`]: disk count, history capacity and win lockout settings
//! - [`puzzle`]: the state machine tying rods, history and counters together
//! - [`event`]: transcript events drained by the shell
//! - [`snapshot`]: read-only copy of the state for rendering
//!
//! # Rules
//!
//! - Only the top disk of a rod moves
//! - A disk may only be placed on an empty rod or on a larger disk
//! - The puzzle is won when every disk sits on rod 2, as observed by
//!   [`Puzzle::check_win`]
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::Puzzle;
//! use tui_hanoi_types::RodIndex;
//!
//! let mut puzzle = Puzzle::with_disks(1).unwrap();
//!
//! assert!(puzzle.move_disk(RodIndex::START, RodIndex::TARGET));
//! assert!(puzzle.check_win());
//! assert_eq!(puzzle.move_count(), 1);
//!
//! // Undo reverses the move but the win stays latched until a restart.
//! assert!(puzzle.undo());
//! assert!(puzzle.is_won());
//! puzzle.reset();
//! assert!(!puzzle.is_won());
//! ```

pub mod config;
pub mod event;
pub mod history;
pub mod puzzle;
pub mod rod;
pub mod snapshot;

pub use tui_hanoi_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, PuzzleConfig};
pub use event::PuzzleEvent;
pub use history::History;
pub use puzzle::{Puzzle, PuzzleStatus};
pub use rod::Rod;
pub use snapshot::PuzzleSnapshot;
