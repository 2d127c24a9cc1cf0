//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (puzzle rules, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! The puzzle always has three rods:
//!
//! - **Rod 0**: start rod, holds every disk after a restart
//! - **Rod 1**: spare rod
//! - **Rod 2**: target rod, the puzzle is won when every disk sits here
//!
//! Disks are identified by their rank: rank 1 is the smallest disk, rank N the largest.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DISK_COUNT` | 3 | Disks placed on rod 0 at start |
//! | `DEFAULT_HISTORY_CAPACITY` | 100 | Moves kept for undo |
//! | `MAX_DISKS` | 16 | Largest accepted disk count |
//! | `TICK_MS` | 16 | Render loop poll interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_hanoi_types::{MoveRecord, RodIndex, ROD_COUNT};
//!
//! let target = RodIndex::TARGET;
//! assert_eq!(target.index(), 2);
//! assert_eq!(target.number(), 3);
//! assert_eq!(RodIndex::new(ROD_COUNT), None);
//!
//! let record = MoveRecord::new(RodIndex::START, target, 1);
//! assert_eq!(record.reversed().to, RodIndex::START);
//! ```

use std::fmt;

/// Number of rods on the board
pub const ROD_COUNT: usize = 3;

/// Index of the rod that must hold every disk to win
pub const TARGET_ROD: usize = 2;

/// Disk count used when nothing else is configured
pub const DEFAULT_DISK_COUNT: u8 = 3;

/// Largest disk count the engine accepts (rod storage is fixed-capacity)
pub const MAX_DISKS: usize = 16;

/// Number of moves kept for undo when nothing else is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Render loop poll interval (in milliseconds)
pub const TICK_MS: u32 = 16;

/// Number of visual tags disks cycle through
pub const PALETTE_SIZE: u8 = 6;

/// A rod position on the board, always in `0..ROD_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RodIndex(u8);

impl RodIndex {
    pub const START: RodIndex = RodIndex(0);
    pub const SPARE: RodIndex = RodIndex(1);
    pub const TARGET: RodIndex = RodIndex(TARGET_ROD as u8);

    /// Create from a zero-based index, `None` if out of range
    pub fn new(index: usize) -> Option<Self> {
        if index < ROD_COUNT {
            Some(RodIndex(index as u8))
        } else {
            None
        }
    }

    /// All rods, left to right
    pub fn all() -> [RodIndex; ROD_COUNT] {
        [RodIndex(0), RodIndex(1), RodIndex(2)]
    }

    /// Zero-based index
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based number as shown to players
    pub fn number(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for RodIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rod {}", self.number())
    }
}

/// A single disk.
///
/// `rank` encodes the size (1 = smallest). `tag` is a palette slot that only
/// the renderer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disk {
    rank: u8,
    tag: u8,
}

impl Disk {
    pub fn new(rank: u8) -> Self {
        Self {
            rank,
            tag: (rank.saturating_sub(1)) % PALETTE_SIZE,
        }
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Whether this disk may be placed on top of `other`
    pub fn fits_on(&self, other: &Disk) -> bool {
        self.rank < other.rank
    }
}

/// One recorded transfer, enough to replay or reverse it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: RodIndex,
    pub to: RodIndex,
    pub rank: u8,
}

impl MoveRecord {
    pub fn new(from: RodIndex, to: RodIndex, rank: u8) -> Self {
        Self { from, to, rank }
    }

    /// The transfer that undoes this one
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            rank: self.rank,
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move { from: RodIndex, to: RodIndex },
    Undo,
    Restart,
}
