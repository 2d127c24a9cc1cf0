//! Rod module - a single LIFO stack of disks
//!
//! Disks are stored bottom to top in a fixed-capacity `ArrayVec`, so moving a
//! disk never allocates. A rod only accepts a disk that is smaller than its
//! current top, which keeps ranks strictly increasing from top to bottom.

use arrayvec::ArrayVec;

use crate::types::{Disk, MAX_DISKS};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rod {
    /// Bottom disk first, top disk last
    disks: ArrayVec<Disk, MAX_DISKS>,
}

impl Rod {
    /// Create an empty rod
    pub fn new() -> Self {
        Self {
            disks: ArrayVec::new(),
        }
    }

    /// Create a rod stacked with ranks `count..=1`, rank 1 on top.
    ///
    /// `count` is clamped to `MAX_DISKS`.
    pub fn stacked(count: u8) -> Self {
        let count = (count as usize).min(MAX_DISKS) as u8;
        let mut rod = Self::new();
        for rank in (1..=count).rev() {
            rod.disks.push(Disk::new(rank));
        }
        rod
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Topmost disk, the only one that can move
    pub fn top(&self) -> Option<&Disk> {
        self.disks.last()
    }

    /// Whether `disk` may be placed on this rod
    pub fn accepts(&self, disk: &Disk) -> bool {
        if self.disks.is_full() {
            return false;
        }
        match self.top() {
            Some(top) => disk.fits_on(top),
            None => true,
        }
    }

    /// Place a disk on top.
    ///
    /// Returns false (and leaves the rod untouched) if the disk does not fit.
    pub fn push(&mut self, disk: Disk) -> bool {
        if !self.accepts(&disk) {
            return false;
        }
        self.disks.push(disk);
        true
    }

    /// Remove and return the top disk
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Disks ordered bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn clear(&mut self) {
        self.disks.clear();
    }

    /// Check that ranks strictly decrease from bottom to top
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[1].fits_on(&pair[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_rod_has_smallest_on_top() {
        let rod = Rod::stacked(4);
        assert_eq!(rod.len(), 4);
        assert_eq!(rod.top().map(Disk::rank), Some(1));
        assert_eq!(rod.disks()[0].rank(), 4);
        assert!(rod.is_ordered());
    }

    #[test]
    fn stacked_rod_is_clamped() {
        let rod = Rod::stacked(u8::MAX);
        assert_eq!(rod.len(), MAX_DISKS);
        assert!(rod.is_ordered());
    }

    #[test]
    fn push_rejects_larger_disk() {
        let mut rod = Rod::new();
        assert!(rod.push(Disk::new(2)));
        assert!(!rod.push(Disk::new(3)));
        assert!(!rod.push(Disk::new(2)));
        assert!(rod.push(Disk::new(1)));
        assert_eq!(rod.len(), 2);
        assert!(rod.is_ordered());
    }

    #[test]
    fn pop_returns_top() {
        let mut rod = Rod::stacked(2);
        assert_eq!(rod.pop().map(|d| d.rank()), Some(1));
        assert_eq!(rod.pop().map(|d| d.rank()), Some(2));
        assert_eq!(rod.pop(), None);
        assert!(rod.is_empty());
    }
}
