//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] order held entirely by one player.
///
/// Legal play never produces two winning lines of different players, but the
/// scan order still decides which line is reported on an arbitrary board.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                Player::O,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Player::X), (Position::TopCenter, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_ties() {
        // Left column (X) is scanned before the middle column (O).
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        let expected_line = [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft];
        assert_eq!(winning_line(&board), Some((Player::X, expected_line)));

        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        // Top row (X) comes before bottom row (O).
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
