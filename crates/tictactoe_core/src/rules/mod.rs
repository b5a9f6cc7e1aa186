//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They never look at whose turn it is or
//! at the move history, so they work on any board, legal or not.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// A winning line takes precedence over a full board, so the last move of a
/// game that fills the board and completes a line is a win, not a draw.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
