//! Tic-tac-toe board rendering.

use super::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use strictly_tictactoe::{GameState, Player, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Width of the board grid including separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the board grid including separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles of the nine squares, indexed by board position.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
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

    let mut cells = [Rect::default(); 9];
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
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// Renders the board with cursor and winning-line highlights.
pub fn render_board(f: &mut Frame, area: Rect, game: &GameState, cursor: Position, theme: Theme) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = board_cells(area);
    let winning = game.winning_line();

    for pos in Position::ALL {
        let highlighted = winning.is_some_and(|line| line.contains(&pos));
        render_square(f, cells[pos.to_index()], game, pos, pos == cursor, highlighted, theme);
    }

    for row in 0..2 {
        let cell = cells[row * 3];
        let y = cell.y + cell.height;
        render_separator(f, Rect::new(board_area.x, y, board_area.width, 1));
    }
    for col in 0..2 {
        let cell = cells[col];
        let x = cell.x + cell.width;
        for row in 0..3 {
            let cell = cells[row * 3 + col];
            render_vertical_sep(f, Rect::new(x, cell.y, 1, cell.height));
        }
    }
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    game: &GameState,
    pos: Position,
    under_cursor: bool,
    highlighted: bool,
    theme: Theme,
) {
    let (text, base_style) = match game.current_snapshot().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlighted {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(text), Line::default()])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
