//! Move-list entries shown next to the board.

use derive_getters::Getters;
use tictactoe_rules::GameState;
use tracing::instrument;

/// Whether an entry can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Clickable: jumps to this move.
    Jump,
    /// Static label for the most recent move.
    Current,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveListItem {
    /// Index into the history this row refers to.
    move_index: usize,
    /// Text shown for the row.
    label: String,
    /// Whether the row is a button or a static label.
    kind: EntryKind,
}

impl MoveListItem {
    /// Returns the intent target if this entry can be activated.
    pub fn jump_target(&self) -> Option<usize> {
        match self.kind {
            EntryKind::Jump => Some(self.move_index),
            EntryKind::Current => None,
        }
    }
}

/// Builds the move list in display order.
///
/// Entry 0 is always "Go to game start". The last history entry is a
/// static "You are at move (row, col)" label whether or not it is the move
/// being viewed; every other entry is a "Go to move (row, col)" button.
#[instrument(skip(state), fields(len = state.history().len(), order = %state.order()))]
pub fn build(state: &GameState) -> Vec<MoveListItem> {
    let tip = state.history().tip();
    let items = state
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(move_index, entry)| match entry.played() {
            Some(pos) if move_index == tip => MoveListItem {
                move_index,
                label: format!("You are at move {}", pos.coordinates()),
                kind: EntryKind::Current,
            },
            Some(pos) => MoveListItem {
                move_index,
                label: format!("Go to move {}", pos.coordinates()),
                kind: EntryKind::Jump,
            },
            None => MoveListItem {
                move_index,
                label: "Go to game start".to_string(),
                kind: EntryKind::Jump,
            },
        })
        .collect();
    state.order().apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rules::Position;

    #[test]
    fn test_fresh_game_has_only_start() {
        let items = build(&GameState::new());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label(), "Go to game start");
        assert_eq!(items[0].jump_target(), Some(0));
    }

    #[test]
    fn test_tip_is_static_label() {
        let state = GameState::new()
            .play(Position::Center)
            .play(Position::BottomLeft);
        let labels: Vec<_> = build(&state).iter().map(|i| i.label().clone()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move (2, 2)",
                "You are at move (3, 1)",
            ]
        );
        assert_eq!(build(&state)[2].jump_target(), None);
    }

    #[test]
    fn test_tip_stays_static_after_jump() {
        let state = GameState::new()
            .play(Position::Center)
            .play(Position::BottomLeft)
            .jump_to(1);
        let items = build(&state);
        assert_eq!(*items[2].kind(), EntryKind::Current);
        assert_eq!(*items[1].kind(), EntryKind::Jump);
    }

    #[test]
    fn test_descending_reverses() {
        let state = GameState::new().play(Position::TopLeft).toggle_sort();
        let items = build(&state);
        assert_eq!(*items[0].move_index(), 1);
        assert_eq!(*items[1].move_index(), 0);
        assert_eq!(items[1].label(), "Go to game start");
    }
}
