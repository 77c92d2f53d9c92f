//! Pure tic-tac-toe game logic with time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: win detection over the 8 fixed lines ([`rules`])
//! - **History**: immutable board snapshots with branch-on-play
//! - **Game**: [`GameState`] transitions (`play`, `jump_to`, `restart`,
//!   `toggle_sort`), each returning a new state
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{GameState, Position};
//!
//! let state = GameState::new()
//!     .play(Position::TopLeft)
//!     .play(Position::Center);
//! assert_eq!(state.status().to_string(), "Next player: X");
//!
//! // Travel back and branch off.
//! let state = state.jump_to(1).play(Position::BottomRight);
//! assert_eq!(state.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod order;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, GameStatus, MAX_MOVES, MoveError};
pub use history::{History, HistoryEntry};
pub use order::SortOrder;
pub use position::Position;
pub use rules::{Win, check_winner};
pub use types::{Board, Player, Square};
