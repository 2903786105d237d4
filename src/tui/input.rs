//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to move indices 0-8, matching the numbers drawn on
/// empty squares.
pub fn digit_to_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Left), Position::BottomCenter);
    }

    #[test]
    fn test_arrows_stop_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_to_index(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_to_index(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_to_index(KeyCode::Char('0')), None);
        assert_eq!(digit_to_index(KeyCode::Tab), None);
    }
}
