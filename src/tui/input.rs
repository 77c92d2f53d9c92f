//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_rules::Position;

/// Moves cursor based on arrow keys.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a digit key `1`-`9` to a cell, counting left to right, top to bottom.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_right_and_down() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_other_keys_keep_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digit_cell() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Char('a')), None);
    }
}
