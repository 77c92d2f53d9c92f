//! User intents and how they drive the game state.

use std::str::FromStr;

use tictactoe_rules::{GameState, Position, SortOrder};
use tracing::{debug, instrument};

/// Something the player asked for by clicking or pressing a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the next mark in a cell.
    Play(Position),
    /// Show the board as it was after the given move.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleSort,
    /// Throw away the history and start over.
    Restart,
}

impl Intent {
    /// Applies this intent, returning the next state.
    #[instrument(skip(state))]
    pub fn apply(self, state: &GameState) -> GameState {
        debug!(intent = ?self, "Applying intent");
        match self {
            Intent::Play(pos) => state.play(pos),
            Intent::JumpTo(target) => state.jump_to(target),
            Intent::ToggleSort => state.toggle_sort(),
            Intent::Restart => state.restart(),
        }
    }

    /// Applies `intents` in order to a fresh game listed in `order`.
    #[instrument(skip(intents), fields(count = intents.len()))]
    pub fn replay(order: SortOrder, intents: &[Intent]) -> GameState {
        intents
            .iter()
            .fold(GameState::with_order(order), |state, intent| {
                intent.apply(&state)
            })
    }
}

/// Error returned when an intent string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Invalid intent '{}': expected play:<0-8>, jump:<move>, sort or restart",
    input
)]
pub struct ParseIntentError {
    input: String,
}

impl ParseIntentError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses `play:<cell>`, `jump:<move>`, `sort` or `restart`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        match trimmed.split_once(':') {
            Some(("play", cell)) => cell
                .parse::<usize>()
                .ok()
                .and_then(Position::from_index)
                .map(Intent::Play)
                .ok_or_else(|| ParseIntentError::new(s)),
            Some(("jump", target)) => target
                .parse::<usize>()
                .map(Intent::JumpTo)
                .map_err(|_| ParseIntentError::new(s)),
            Some(_) => Err(ParseIntentError::new(s)),
            None => match trimmed.as_str() {
                "sort" => Ok(Intent::ToggleSort),
                "restart" => Ok(Intent::Restart),
                _ => Err(ParseIntentError::new(s)),
            },
        }
    }
}
