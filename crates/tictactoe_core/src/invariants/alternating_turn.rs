//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the game is
/// in progress the current player is whoever is next in that pattern; once it
/// has ended the current player is left on whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        if state.outcome().is_terminal() {
            history
                .last()
                .is_some_and(|last| last.player == state.current_player())
        } else {
            let expected_next = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            state.current_player() == expected_next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
