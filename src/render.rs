//! Plain-text rendering of the game screen.
//!
//! Used by the `replay` command and handy in tests. Winning cells are
//! bracketed, move-list buttons are shown as `[label]`.

use tictactoe_rules::{GameState, Position};
use tracing::instrument;

use crate::view::{EntryKind, move_list};

/// Renders status, board, controls and move list as text.
#[instrument(skip(state))]
pub fn render_text(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&state.status().to_string());
    out.push_str("\n\n");
    out.push_str(&render_board(state));
    out.push_str("\n\n");
    out.push_str(&format!(
        "[{}] [Restart]\n\n",
        state.order().button_label()
    ));

    for (row, item) in move_list::build(state).iter().enumerate() {
        let text = match item.kind() {
            EntryKind::Jump => format!("[{}]", item.label()),
            EntryKind::Current => item.label().clone(),
        };
        out.push_str(&format!("{}. {}\n", row + 1, text));
    }
    out
}

fn render_board(state: &GameState) -> String {
    let line = state.winner().map(|win| win.line());
    let highlight: &[Position] = match &line {
        Some(line) => line,
        None => &[],
    };
    state.current_board().display(highlight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fresh_game() {
        let text = render_text(&GameState::new());
        assert_eq!(
            text,
            "Next player: X\n\n   |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   |   \n\n\
             [Sort by asd] [Restart]\n\n1. [Go to game start]\n"
        );
    }

    #[test]
    fn test_render_brackets_winning_line() {
        let state = [0, 4, 1, 7, 2]
            .into_iter()
            .filter_map(Position::from_index)
            .fold(GameState::new(), |s, pos| s.play(pos));
        let text = render_text(&state);
        assert!(text.starts_with("Winner: X\n"));
        assert!(text.contains("[X]|[X]|[X]"));
        assert!(text.contains("6. You are at move (1, 3)"));
    }
}
