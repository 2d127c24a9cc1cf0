use crate::rod::Rod;
use crate::types::{Disk, RodIndex, DEFAULT_DISK_COUNT, DEFAULT_HISTORY_CAPACITY, ROD_COUNT};

/// Read-only copy of everything the shell needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSnapshot {
    pub rods: [Rod; ROD_COUNT],
    pub disk_count: u8,
    pub move_count: u32,
    pub history_len: usize,
    pub history_capacity: usize,
    pub won: bool,
    /// Won and configured to reject further moves
    pub locked: bool,
    pub episode_id: u32,
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        Self {
            rods: Default::default(),
            disk_count: DEFAULT_DISK_COUNT,
            move_count: 0,
            history_len: 0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            won: false,
            locked: false,
            episode_id: 0,
        }
    }
}

impl PuzzleSnapshot {
    pub fn rod(&self, rod: RodIndex) -> &Rod {
        &self.rods[rod.index()]
    }

    pub fn top_disk(&self, rod: RodIndex) -> Option<Disk> {
        self.rods[rod.index()].top().copied()
    }

    pub fn can_undo(&self) -> bool {
        self.history_len > 0 && !self.locked
    }
}
