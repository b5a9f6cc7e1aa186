//! Terminal front-end for [`tictactoe_core`].
//!
//! Draws the board with ratatui, turns crossterm key presses and mouse clicks
//! into engine calls, and shows whose turn it is or how the game ended.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod ui;

pub use app::{App, Control};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Theme, TuiConfig};
pub use input::{Action, Direction, action_for, move_cursor};
pub use logging::init as init_logging;
pub use ui::{cell_rects, draw, hit_test};
