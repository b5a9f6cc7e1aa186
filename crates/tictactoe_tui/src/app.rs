//! Application state and logic.

use crate::config::Theme;
use crate::input::{self, Action};
use crossterm::event::KeyEvent;
use tictactoe_core::{Game, Position};
use tracing::{debug, info};

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Redraw and wait for the next event.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Wraps the engine with what only the terminal needs: the keyboard cursor
/// and the marker colors.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    theme: Theme,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            theme,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the marker colors.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        let Some(action) = input::action_for(key) else {
            return Control::Continue;
        };
        debug!(?action, "Key action");

        match action {
            Action::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Reset => self.restart(),
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Handles a click on a square.
    pub fn handle_click(&mut self, pos: Position) {
        self.cursor = pos;
        self.play(pos);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }

    fn play(&mut self, pos: Position) {
        let state = self.game.apply_move(pos);
        debug!(position = %pos, outcome = ?state.outcome(), "Move requested");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
