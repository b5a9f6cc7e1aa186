//! Tic-tac-toe game engine.

use super::action::Move;
use super::invariants;
use super::position::Position;
use super::rules::evaluate_outcome;
use super::types::{GameState, Outcome, Player, Square};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the single [`GameState`] of a game. The state changes only through
/// [`Game::apply_move`] and [`Game::reset`]; everything else is read access.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's marker at `pos`.
    ///
    /// A move onto an occupied square, or any move once the game has been
    /// won or drawn, leaves the state untouched. The rejection is not
    /// reported to the caller; a front-end is expected to stop offering such
    /// squares instead of handling an error.
    ///
    /// Returns the state after the call so the caller can render it.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> &GameState {
        if self.state.outcome.is_terminal() {
            debug!(outcome = ?self.state.outcome, "Move ignored, game is over");
            return &self.state;
        }
        if !self.state.board.is_empty(pos) {
            debug!("Move ignored, square is occupied");
            return &self.state;
        }

        let player = self.state.current_player;
        self.state.board.set(pos, Square::Occupied(player));
        self.state.history.push(Move::new(player, pos));

        self.state.outcome = evaluate_outcome(&self.state.board);
        match self.state.outcome {
            Outcome::InProgress => {
                self.state.current_player = player.opponent();
                info!(next = %self.state.current_player, "Move applied");
            }
            Outcome::Won(winner) => info!(%winner, "Move applied, game won"),
            Outcome::Draw => info!("Move applied, game drawn"),
        }

        if cfg!(debug_assertions)
            && let Err(violations) = invariants::check_game(&self.state)
        {
            for violation in &violations {
                error!(%violation, "Game state invariant violated");
            }
            debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
        }

        &self.state
    }

    /// Starts over: empty board, X to move, history cleared.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.state.history.len(), "Resetting game");
        self.state = GameState::new();
    }

    /// One-line description of the game for display.
    ///
    /// `"Player X's Turn"` while the game is running, `"Player O Wins!"`
    /// after a win and `"It's a Draw!"` after a draw.
    pub fn status_line(&self) -> String {
        status_line(self.state.outcome, self.state.current_player)
    }
}

fn status_line(outcome: Outcome, current: Player) -> String {
    match outcome {
        Outcome::InProgress => format!("Player {current}'s Turn"),
        Outcome::Won(winner) => format!("Player {winner} Wins!"),
        Outcome::Draw => "It's a Draw!".to_string(),
    }
}
