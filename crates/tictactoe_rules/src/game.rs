//! Game state with time travel.
//!
//! [`GameState`] owns the history, the pointer into it, and the move-list
//! order. Every transition borrows the current state and returns a new one.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::history::{History, HistoryEntry};
use crate::order::SortOrder;
use crate::rules::{Win, check_winner, is_full};
use crate::{Board, Player, Position};

/// Number of plies that fill the board.
pub const MAX_MOVES: usize = 9;

/// Status line derived from the state at the current move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine moves were played without a winner.
    #[display("It's a draw.")]
    Draw,
    /// Game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Why a play was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the current move already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

/// Complete game state: history, current move pointer and sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    history: History,
    current_move: usize,
    order: SortOrder,
}

impl GameState {
    /// Creates a new game at the start, listed in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the index of the move being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the move-list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the board at the current move.
    pub fn current_board(&self) -> &Board {
        self.history.entries()[self.current_move].board()
    }

    /// Returns the player to move, by parity of the current move.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Returns the winning line on the current board, if any.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.current_board())
    }

    /// Whether the current move is the most recent entry.
    pub fn is_at_tip(&self) -> bool {
        self.current_move == self.history.tip()
    }

    /// Derives the status line for the current move.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Winner(win.player())
        } else if self.current_move == MAX_MOVES {
            debug_assert!(is_full(self.current_board()));
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Plays `pos` for the player to move.
    ///
    /// Entries after the current move are dropped before the new one is
    /// appended, and the pointer moves to the new tip.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the current board is already won
    /// and [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_play(&self, pos: Position) -> Result<Self, MoveError> {
        let board = self.current_board();
        if let Some(win) = check_winner(board) {
            return Err(MoveError::GameOver(win.player()));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let entry = HistoryEntry::new(board.with_mark(pos, player), pos);
        let history = self.history.branch(self.current_move, entry);
        let current_move = history.tip();
        debug!(%player, position = %pos, current_move, "Move played");

        Ok(Self {
            history,
            current_move,
            order: self.order,
        })
    }

    /// Plays `pos`, or returns an unchanged copy if the move is not allowed.
    pub fn play(&self, pos: Position) -> Self {
        self.try_play(pos).unwrap_or_else(|_| self.clone())
    }

    /// Moves the pointer to `target`, keeping the history intact.
    ///
    /// Targets past the tip land on the tip.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&self, target: usize) -> Self {
        let current_move = target.min(self.history.tip());
        debug!(current_move, "Jumped in history");
        Self {
            history: self.history.clone(),
            current_move,
            order: self.order,
        }
    }

    /// Starts over with an empty history. The sort order is kept.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        info!("Game restarted");
        Self::with_order(self.order)
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_sort(&self) -> Self {
        Self {
            history: self.history.clone(),
            current_move: self.current_move,
            order: self.order.toggle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: GameState, moves: &[usize]) -> GameState {
        moves.iter().fold(state, |state, &i| {
            state.play(Position::from_index(i).expect("valid index"))
        })
    }

    #[test]
    fn test_new_game_status() {
        let state = GameState::new();
        assert_eq!(state.status(), GameStatus::NextPlayer(Player::X));
        assert_eq!(state.status().to_string(), "Next player: X");
        assert!(state.is_at_tip());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let state = GameState::new().play(Position::Center);
        assert_eq!(
            state.try_play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(state.play(Position::Center), state);
    }

    #[test]
    fn test_win_blocks_further_play() {
        let state = play_all(GameState::new(), &[0, 4, 1, 7, 2]);
        assert_eq!(state.status().to_string(), "Winner: X");
        assert_eq!(
            state.try_play(Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
        assert_eq!(state.play(Position::BottomRight), state);
    }

    #[test]
    fn test_jump_then_play_truncates() {
        let state = play_all(GameState::new(), &[0, 4, 1, 7]);
        assert_eq!(state.history().len(), 5);
        assert_eq!(state.current_move(), 4);

        let state = state.jump_to(2).play(Position::BottomRight);
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.current_move(), 3);
        assert!(state.history().is_consistent());
    }

    #[test]
    fn test_jump_is_clamped_to_tip() {
        let state = play_all(GameState::new(), &[0, 4]);
        assert_eq!(state.jump_to(10).current_move(), 2);
    }

    #[test]
    fn test_restart_keeps_order() {
        let state = play_all(GameState::new(), &[0, 4]).toggle_sort().restart();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.order(), SortOrder::Descending);
    }

    #[test]
    fn test_draw_only_at_move_nine() {
        // X O X / X O O / O X X
        let state = play_all(GameState::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.current_move(), 9);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.status().to_string(), "It's a draw.");

        let rewound = state.jump_to(8);
        assert_eq!(rewound.status(), GameStatus::NextPlayer(Player::X));
    }
}
