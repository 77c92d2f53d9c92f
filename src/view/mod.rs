//! Presentation-side views derived from the game state.

pub mod move_list;

pub use move_list::{EntryKind, MoveListItem};
