//! Immutable move history.
//!
//! Every entry is a full board snapshot plus the cell that was played to
//! reach it. Branching from an earlier entry builds a new history that
//! shares nothing with the old one.

use serde::Serialize;
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// A board snapshot and the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    board: Board,
    played: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board, nothing played.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// Creates an entry for a board reached by playing `played`.
    pub fn new(board: Board, played: Position) -> Self {
        Self {
            board,
            played: Some(played),
        }
    }

    /// The board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell played to reach this entry, `None` for the game start.
    pub fn played(&self) -> Option<Position> {
        self.played
    }
}

/// Ordered sequence of history entries. Index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the game start.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the most recent entry.
    pub fn tip(&self) -> usize {
        self.entries.len() - 1
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns a new history made of entries `0..=at` followed by `entry`.
    ///
    /// Anything after `at` is discarded.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn branch(&self, at: usize, entry: HistoryEntry) -> Self {
        let keep = (at + 1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(entry);
        Self { entries }
    }

    /// Checks the structural invariant of the history.
    ///
    /// Entry 0 is an empty board with nothing played. Every later entry
    /// differs from its predecessor in exactly the recorded cell, which was
    /// empty before and now holds the mark whose turn it was.
    pub fn is_consistent(&self) -> bool {
        let Some(first) = self.entries.first() else {
            return false;
        };
        if first.played.is_some() || first.board != Board::new() {
            return false;
        }

        self.entries.windows(2).enumerate().all(|(m, pair)| {
            let [prev, next] = pair else {
                return false;
            };
            let Some(played) = next.played else {
                return false;
            };
            let changed = Position::ALL
                .iter()
                .filter(|pos| prev.board.get(**pos) != next.board.get(**pos))
                .count();
            changed == 1
                && prev.board.is_empty(played)
                && next.board.get(played) == Square::Occupied(Player::for_move(m))
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
