//! Puzzle events - the human-readable transcript side channel.
//!
//! The engine queues one event per observable change. The shell drains the
//! queue after each input and decides where the lines go (side panel, stdout).

use std::fmt;

use crate::types::RodIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleEvent {
    /// A disk was transferred; `move_number` is the move count after the move.
    Moved {
        move_number: u32,
        rank: u8,
        from: RodIndex,
        to: RodIndex,
    },
    /// The latest recorded move was reversed; `from`/`to` are the original move's rods.
    Undone {
        rank: u8,
        from: RodIndex,
        to: RodIndex,
        move_count: u32,
    },
    /// A win check found every disk on the target rod.
    Won { total_moves: u32 },
    Restarted { disk_count: u8 },
}

impl fmt::Display for PuzzleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleEvent::Moved { rank, from, to, .. } => write!(
                f,
                "Disk {} moved from rod {} to rod {}.",
                rank,
                from.number(),
                to.number()
            ),
            PuzzleEvent::Undone { rank, from, to, .. } => write!(
                f,
                "Disk {} returned from rod {} to rod {}.",
                rank,
                to.number(),
                from.number()
            ),
            PuzzleEvent::Won { total_moves } => write!(f, "You Win! Total moves: {}", total_moves),
            PuzzleEvent::Restarted { disk_count } => {
                write!(f, "Restarted with {} disks.", disk_count)
            }
        }
    }
}
