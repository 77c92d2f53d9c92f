//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// The 8 winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and which three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    line: [Position; 3],
}

impl Win {
    /// The player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three cells of the winning line, in line order.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose three squares hold the same
/// mark, or `None` if no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}
