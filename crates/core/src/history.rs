//! History module - bounded undo log
//!
//! Records are kept oldest first. Once `capacity` records are stored, further
//! pushes are dropped: nothing is ever evicted, so the oldest moves stay
//! reversible and the newest ones beyond the limit do not.

use crate::types::MoveRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    records: Vec<MoveRecord>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Store a record if there is room.
    ///
    /// Returns false when the log is full and the record was dropped.
    pub fn push(&mut self, record: MoveRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RodIndex;

    fn record(rank: u8) -> MoveRecord {
        MoveRecord::new(RodIndex::START, RodIndex::TARGET, rank)
    }

    #[test]
    fn push_pop_is_lifo() {
        let mut history = History::new(4);
        assert!(history.push(record(1)));
        assert!(history.push(record(2)));
        assert_eq!(history.pop().map(|r| r.rank), Some(2));
        assert_eq!(history.pop().map(|r| r.rank), Some(1));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn full_history_drops_new_records() {
        let mut history = History::new(2);
        assert!(history.push(record(1)));
        assert!(history.push(record(2)));
        assert!(history.is_full());
        assert!(!history.push(record(3)));

        // Oldest entries survive, newest was dropped.
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(), Some(record(2)));
        assert_eq!(history.pop(), Some(record(1)));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = History::new(0);
        assert!(!history.push(record(1)));
        assert!(history.is_empty());
    }
}
