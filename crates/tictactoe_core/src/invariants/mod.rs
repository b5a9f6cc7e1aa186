//! Properties every reachable game state satisfies.
//!
//! Each invariant is a unit type implementing [`Invariant`]; tuples of them
//! implement [`InvariantSet`] so the whole set can be checked in one call.
//! [`crate::Game`] checks [`GameInvariants`] after every accepted move in
//! debug builds.

pub mod alternating_turn;
pub mod marker_balance;
pub mod monotonic_board;
pub mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use marker_balance::MarkerBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invariant violated: {}", self.description)
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    MarkerBalanceInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
);

/// Checks [`GameInvariants`] against a state.
pub(crate) fn check_game(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(state)
}
