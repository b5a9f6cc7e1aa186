//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must only ever fill empty
/// squares, and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
