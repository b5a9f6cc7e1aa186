//! Marker balance invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and turns strictly alternate.
pub struct MarkerBalanceInvariant;

impl Invariant<GameState> for MarkerBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X markers equal O markers or exceed them by one"
    }
}
