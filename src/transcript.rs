//! Human-readable session transcript.
//!
//! One line per puzzle event, in order. Shown in the side panel while playing
//! and printed to stdout once the terminal is restored.

use crate::core::PuzzleEvent;

/// Every line of the session, kept in full for the stdout dump on exit.
///
/// The side panel draws only the newest lines that fit (see [`Transcript::tail`]).
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn record(&mut self, event: PuzzleEvent) {
        self.lines.push(event.to_string());
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = PuzzleEvent>) {
        for event in events {
            self.record(event);
        }
    }

    /// Lines, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The newest `n` lines, oldest first
    pub fn tail(&self, n: usize) -> &[String] {
        &self.lines[self.lines.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::types::RodIndex;

    #[test]
    fn records_moves_and_win_in_order() {
        let mut puzzle = Puzzle::with_disks(1).unwrap();
        puzzle.move_disk(RodIndex::START, RodIndex::TARGET);
        puzzle.check_win();

        let mut transcript = Transcript::new();
        transcript.extend(puzzle.drain_events());

        assert_eq!(
            transcript.lines(),
            &[
                "Disk 1 moved from rod 1 to rod 3.".to_string(),
                "You Win! Total moves: 1".to_string(),
            ]
        );
    }

    #[test]
    fn keeps_every_line_and_tails_the_newest() {
        let mut puzzle = Puzzle::with_disks(2).unwrap();
        let mut transcript = Transcript::new();
        for _ in 0..50 {
            puzzle.move_disk(RodIndex::START, RodIndex::SPARE);
            puzzle.undo();
        }
        transcript.extend(puzzle.drain_events());
        for _ in 0..50 {
            puzzle.move_disk(RodIndex::START, RodIndex::SPARE);
            puzzle.undo();
            transcript.extend(puzzle.drain_events());
        }

        // The puzzle's event queue is bounded; the transcript is not.
        assert!(transcript.len() > 100);
        assert_eq!(transcript.tail(2).len(), 2);
        assert_eq!(transcript.tail(2), &transcript.lines()[transcript.len() - 2..]);
        assert_eq!(transcript.tail(1000).len(), transcript.len());
    }
}
