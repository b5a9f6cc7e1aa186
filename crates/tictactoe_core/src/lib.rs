//! Tic-tac-toe game logic.
//!
//! The crate holds everything a front-end needs to run a two-player game on a
//! 3x3 board and nothing it doesn't: no rendering, no input handling.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Outcome`], [`GameState`]
//! - **Positions**: [`Position`] names the nine squares, so an index outside
//!   the board cannot reach the engine
//! - **Rules**: pure functions over a board ([`evaluate_outcome`],
//!   [`winning_line`])
//! - **Engine**: [`Game`] owns one [`GameState`] and mutates it only through
//!   [`Game::apply_move`] and [`Game::reset`]
//! - **Invariants**: properties every reachable state satisfies, checkable
//!   one at a time or as a set
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomLeft,
//!     Position::TopRight,
//! ] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.state().outcome(), Outcome::Won(Player::X));
//! assert_eq!(game.status_line(), "Player X Wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkerBalanceInvariant, MonotonicBoardInvariant, OutcomeConsistentInvariant,
};
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate_outcome, is_full, winning_line};
pub use types::{Board, GameState, Outcome, Player, Square};
