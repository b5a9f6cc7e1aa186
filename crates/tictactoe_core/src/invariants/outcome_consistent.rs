//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate_outcome;

/// Invariant: The recorded outcome is what the rules say about the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == evaluate_outcome(state.board())
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}
