//! Puzzle module - the complete puzzle state machine
//!
//! This module ties together the rods, the bounded undo history and the session
//! counters. It enforces the stacking rule, records and reverses moves, and
//! detects the win condition.
//!
//! The puzzle is either `Playing` or `Won`. A win is only observed by
//! [`Puzzle::check_win`], which the caller runs after every successful move.
//! Only a restart returns a won puzzle to `Playing`: undo leaves the win flag set.

use std::collections::VecDeque;

use crate::config::{ConfigError, PuzzleConfig};
use crate::event::PuzzleEvent;
use crate::history::History;
use crate::rod::Rod;
use crate::snapshot::PuzzleSnapshot;
use crate::types::{Disk, GameAction, MoveRecord, RodIndex, ROD_COUNT};

/// Events kept for the shell before the oldest are dropped
const EVENT_QUEUE_CAP: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleStatus {
    Playing,
    Won,
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    config: PuzzleConfig,
    rods: [Rod; ROD_COUNT],
    history: History,
    move_count: u32,
    won: bool,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    events: VecDeque<PuzzleEvent>,
}

impl Puzzle {
    /// Create a puzzle with every disk on the start rod.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rods: [Rod::stacked(config.disk_count), Rod::new(), Rod::new()],
            history: History::new(config.history_capacity),
            move_count: 0,
            won: false,
            episode_id: 0,
            events: VecDeque::with_capacity(EVENT_QUEUE_CAP),
        })
    }

    /// Create a puzzle with `disk_count` disks and default history capacity.
    pub fn with_disks(disk_count: u8) -> Result<Self, ConfigError> {
        Self::new(PuzzleConfig::with_disks(disk_count))
    }

    /// Put every disk back on the start rod and clear history, counters and the win flag.
    pub fn reset(&mut self) {
        let [start, spare, target] = &mut self.rods;
        *start = Rod::stacked(self.config.disk_count);
        spare.clear();
        target.clear();
        self.history.clear();
        self.move_count = 0;
        self.won = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.push_event(PuzzleEvent::Restarted {
            disk_count: self.config.disk_count,
        });
    }

    /// Restart with a different disk count.
    ///
    /// On error the current puzzle is left untouched.
    pub fn reset_with(&mut self, disk_count: u8) -> Result<(), ConfigError> {
        let config = PuzzleConfig {
            disk_count,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn disk_count(&self) -> u8 {
        self.config.disk_count
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> PuzzleStatus {
        if self.won {
            PuzzleStatus::Won
        } else {
            PuzzleStatus::Playing
        }
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn rods(&self) -> &[Rod; ROD_COUNT] {
        &self.rods
    }

    pub fn rod(&self, rod: RodIndex) -> &Rod {
        &self.rods[rod.index()]
    }

    pub fn top_disk(&self, rod: RodIndex) -> Option<Disk> {
        self.rods[rod.index()].top().copied()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && !self.locked()
    }

    /// Disks across all rods; always equals `disk_count()`.
    pub fn total_disks(&self) -> usize {
        self.rods.iter().map(Rod::len).sum()
    }

    /// Won and configured to reject further moves.
    fn locked(&self) -> bool {
        self.config.lock_on_win && self.won
    }

    /// Whether the top disk of `from` may be placed on `to`.
    ///
    /// Pure query. A rod never accepts its own top disk, so `from == to` is
    /// always false here too.
    pub fn can_move(&self, from: RodIndex, to: RodIndex) -> bool {
        let Some(disk) = self.rods[from.index()].top() else {
            return false;
        };
        match self.rods[to.index()].top() {
            Some(top) => disk.fits_on(top),
            None => true,
        }
    }

    /// Transfer the top disk of `from` onto `to`.
    ///
    /// Returns false without touching anything if the move is illegal or a
    /// no-op. A legal move always counts, even if the history is full and the
    /// move cannot be undone later.
    pub fn move_disk(&mut self, from: RodIndex, to: RodIndex) -> bool {
        if self.locked() || from == to || !self.can_move(from, to) {
            return false;
        }

        let Some(disk) = self.rods[from.index()].pop() else {
            return false;
        };
        if !self.rods[to.index()].push(disk) {
            self.rods[from.index()].push(disk);
            return false;
        }

        // Dropped silently when full.
        self.history.push(MoveRecord::new(from, to, disk.rank()));

        self.move_count = self.move_count.wrapping_add(1);
        self.push_event(PuzzleEvent::Moved {
            move_number: self.move_count,
            rank: disk.rank(),
            from,
            to,
        });
        true
    }

    /// Reverse the most recent recorded move.
    ///
    /// The disk taken back is whatever sits on top of the recorded destination;
    /// moves and undos are strictly stack-ordered so it is the recorded disk.
    pub fn undo(&mut self) -> bool {
        if self.locked() {
            return false;
        }
        let Some(record) = self.history.pop() else {
            return false;
        };

        let back = record.reversed();
        let Some(disk) = self.rods[back.from.index()].pop() else {
            self.history.push(record);
            return false;
        };
        if !self.rods[back.to.index()].push(disk) {
            self.rods[back.from.index()].push(disk);
            self.history.push(record);
            return false;
        }

        self.move_count = self.move_count.saturating_sub(1);
        self.push_event(PuzzleEvent::Undone {
            rank: disk.rank(),
            from: record.from,
            to: record.to,
            move_count: self.move_count,
        });
        true
    }

    /// True iff every disk is on the target rod. Latches the win flag.
    pub fn check_win(&mut self) -> bool {
        if self.rods[RodIndex::TARGET.index()].len() != self.config.disk_count as usize {
            return false;
        }
        self.won = true;
        self.push_event(PuzzleEvent::Won {
            total_moves: self.move_count,
        });
        true
    }

    /// Apply a shell action. A successful move is followed by a win check.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move { from, to } => {
                let moved = self.move_disk(from, to);
                if moved {
                    self.check_win();
                }
                moved
            }
            GameAction::Undo => self.undo(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Take all queued transcript events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PuzzleEvent> + '_ {
        self.events.drain(..)
    }

    fn push_event(&mut self, event: PuzzleEvent) {
        if self.events.len() >= EVENT_QUEUE_CAP {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        for (dst, src) in out.rods.iter_mut().zip(self.rods.iter()) {
            dst.clone_from(src);
        }
        out.disk_count = self.config.disk_count;
        out.move_count = self.move_count;
        out.history_len = self.history.len();
        out.history_capacity = self.history.capacity();
        out.won = self.won;
        out.locked = self.locked();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut s = PuzzleSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        let config = PuzzleConfig::default();
        Self {
            config,
            rods: [Rod::stacked(config.disk_count), Rod::new(), Rod::new()],
            history: History::new(config.history_capacity),
            move_count: 0,
            won: false,
            episode_id: 0,
            events: VecDeque::with_capacity(EVENT_QUEUE_CAP),
        }
    }
}
