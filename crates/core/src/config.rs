//! Puzzle configuration and its validation errors.

use std::fmt;

use crate::types::{DEFAULT_DISK_COUNT, DEFAULT_HISTORY_CAPACITY, MAX_DISKS};

/// Settings fixed for the lifetime of a puzzle session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of disks (1..=MAX_DISKS)
    pub disk_count: u8,
    /// Moves kept for undo; moves beyond this are applied but not recorded
    pub history_capacity: usize,
    /// Reject moves and undos once the puzzle is won
    pub lock_on_win: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISK_COUNT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            lock_on_win: false,
        }
    }
}

impl PuzzleConfig {
    pub fn with_disks(disk_count: u8) -> Self {
        Self {
            disk_count,
            ..Self::default()
        }
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn lock_on_win(mut self, lock: bool) -> Self {
        self.lock_on_win = lock;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disk_count == 0 || self.disk_count as usize > MAX_DISKS {
            return Err(ConfigError::InvalidDiskCount(self.disk_count));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDiskCount(u8),
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::InvalidDiskCount(_) => "invalid_configuration",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDiskCount(n) => {
                write!(f, "disk count must be between 1 and {}, got {}", MAX_DISKS, n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
