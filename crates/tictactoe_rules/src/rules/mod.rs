//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Rules are kept
//! apart from the history model so the same board can be judged at any
//! point in time.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Win, check_winner};
