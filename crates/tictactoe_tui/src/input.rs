//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Direction),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a square directly.
    Play(Position),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action, `None` for unbound keys.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        // '1' is the top-left square, matching the numbers drawn on empty squares.
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Play),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_map_to_positions() {
        assert_eq!(action_for(press(KeyCode::Char('1'))), Some(Action::Play(Position::TopLeft)));
        assert_eq!(action_for(press(KeyCode::Char('5'))), Some(Action::Play(Position::Center)));
        assert_eq!(
            action_for(press(KeyCode::Char('9'))),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::PlayCursor));
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }
}
