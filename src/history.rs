//! The game line: an append-only log of the positions played so far,
//! newest last, consulted for the threefold-repetition rule.
//!
//! The game layer appends between searches; search threads only read.
//! The process-wide instance mirrors that contract with a mutex.

use crate::position::Position;
use once_cell::sync::Lazy;
use std::sync::Mutex;

#[derive(Default)]
pub struct History {
    positions: Vec<Position>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn add(&mut self, position: Position) {
        self.positions.push(position);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// The most recently recorded position.
    pub fn current(&self) -> Option<&Position> {
        self.positions.last()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Count the logged positions matching `candidate`, scanning from
    /// the newest entry backwards. The scan stops after the first
    /// entry whose half-move clock is zero: a pawn move or capture
    /// happened there, and nothing before it can repeat.
    ///
    /// Matching is by hash first, confirmed structurally.
    pub fn repetitions(&self, candidate: &Position) -> u16 {
        let hash = candidate.hash();
        let mut count = 0;
        for position in self.positions.iter().rev() {
            if position.hash() == hash && position.is_same_position(candidate) {
                count += 1;
            }
            if position.half_move_clock() == 0 {
                break;
            }
        }
        count
    }
}

/// The process-wide game line, shared the way the movegen and Zobrist
/// tables are, but mutable between searches.
pub fn global() -> &'static Mutex<History> {
    static HISTORY: Lazy<Mutex<History>> = Lazy::new(|| Mutex::new(History::new()));
    &HISTORY
}
