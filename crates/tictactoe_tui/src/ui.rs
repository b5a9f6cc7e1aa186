//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Outcome, Player, Position, Square, winning_line};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "arrows/hjkl move · enter/space/1-9/click play · r restart · q quit";

/// Splits the screen into title, board, status and help areas.
fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Rectangles of the nine squares, in index order, for a screen of `area`.
///
/// Drawing and mouse hit-testing both go through this, so a click lands on
/// exactly the square that was drawn there.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(screen_chunks(area)[1], BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut rects = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[row * 3 + col] = cell;
        }
    }
    rects
}

/// Finds the square drawn at terminal coordinates `(column, row)`.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let point = ratatui::layout::Position::new(column, row);
    cell_rects(area)
        .iter()
        .position(|rect| rect.contains(point))
        .and_then(Position::from_index)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area, help_area] = screen_chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    let state = app.game().state();
    let status_color = match state.outcome() {
        Outcome::InProgress => marker_color(app, state.current_player()),
        Outcome::Won(winner) => marker_color(app, winner),
        Outcome::Draw => Color::Yellow,
    };
    let status = Paragraph::new(app.game().status_line())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let separator = Style::default().fg(Color::DarkGray);

    // Grid lines go in first; cells are drawn over the crossings.
    let horizontal = "─".repeat(BOARD_WIDTH as usize);
    for offset in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let line_area = Rect::new(board_area.x, board_area.y + offset, board_area.width, 1)
            .intersection(board_area);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(separator), line_area);
    }
    let vertical = vec![Line::from("│"); BOARD_HEIGHT as usize];
    for offset in [CELL_WIDTH, CELL_WIDTH * 2 + 1] {
        let line_area = Rect::new(board_area.x + offset, board_area.y, 1, board_area.height)
            .intersection(board_area);
        frame.render_widget(
            Paragraph::new(vertical.clone()).style(separator),
            line_area,
        );
    }

    let state = app.game().state();
    let winning = winning_line(state.board()).map(|(_, line)| line);
    let game_over = state.outcome().is_terminal();

    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(frame.area())) {
        let (symbol, mut style) = match state.board().get(pos) {
            Square::Empty => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(player) => (
                player.to_string(),
                Style::default()
                    .fg(marker_color(app, player))
                    .add_modifier(Modifier::BOLD),
            ),
        };

        if winning.is_some_and(|line| line.contains(&pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        } else if game_over {
            style = style.add_modifier(Modifier::DIM);
        } else if pos == app.cursor() {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let text = Text::from(vec![
            Line::default(),
            Line::from(Span::raw(symbol)),
            Line::default(),
        ]);
        let cell = Paragraph::new(text).style(style).alignment(Alignment::Center);
        frame.render_widget(cell, rect);
    }
}

fn marker_color(app: &App, player: Player) -> Color {
    match player {
        Player::X => *app.theme().x(),
        Player::O => *app.theme().o(),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_cells_are_row_major_and_disjoint() {
        let rects = cell_rects(SCREEN);
        for rect in &rects {
            assert_eq!((rect.width, rect.height), (CELL_WIDTH, CELL_HEIGHT));
        }
        assert!(rects[0].x < rects[1].x && rects[1].x < rects[2].x);
        assert_eq!(rects[0].y, rects[2].y);
        assert!(rects[0].y < rects[3].y && rects[3].y < rects[6].y);
        assert_eq!(rects[0].x, rects[6].x);
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_test_finds_each_cell() {
        for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(SCREEN)) {
            assert_eq!(hit_test(SCREEN, rect.x, rect.y), Some(pos));
            assert_eq!(
                hit_test(SCREEN, rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_hit_test_misses_outside_board() {
        assert_eq!(hit_test(SCREEN, 0, 0), None);
        let first = cell_rects(SCREEN)[0];
        // The grid line right of the top-left square.
        assert_eq!(hit_test(SCREEN, first.x + first.width, first.y), None);
    }
}
