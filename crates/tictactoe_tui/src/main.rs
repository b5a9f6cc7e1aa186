//! Two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tictactoe_tui::{App, Cli, Control, TuiConfig};
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;
    let theme = config.theme()?;

    tictactoe_tui::init_logging(&config)?;
    info!(?config, "Starting tic-tac-toe");

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, App::new(theme));
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws, then blocks for one event and handles it before drawing again.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| tictactoe_tui::draw(frame, &app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                match tictactoe_tui::hit_test(area, column, row) {
                    Some(pos) => app.handle_click(pos),
                    None => debug!(column, row, "Click outside the board"),
                }
            }
            _ => {}
        }
    }
}
