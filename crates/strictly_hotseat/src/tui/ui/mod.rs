//! UI rendering using ratatui.
//!
//! Rendering is a set of plain functions over the [`App`] they are given.
//! [`layout`] is shared by drawing and mouse hit-testing so both agree on
//! where every widget sits.

mod board;
mod history;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::Position;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, board_cells, render_board};
pub use history::{history_offset, render_history};

/// Mark colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
        }
    }
}

const HISTORY_WIDTH: u16 = 30;

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title bar.
    pub title: Rect,
    /// Three-line tagline.
    pub tagline: Rect,
    /// Board grid.
    pub board: Rect,
    /// History panel, when shown.
    pub history: Option<Rect>,
    /// Status box.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board square.
    Cell(Position),
    /// An entry of the history panel.
    Step(usize),
}

/// Splits the frame area into the screen regions.
pub fn layout(area: Rect, show_history: bool) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    let (board, history) = if show_history {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(HISTORY_WIDTH)])
            .split(chunks[2]);
        (body[0], Some(body[1]))
    } else {
        (chunks[2], None)
    };

    Screen {
        title: chunks[0],
        tagline: chunks[1],
        board,
        history,
        status: chunks[3],
        help: chunks[4],
    }
}

/// Finds what sits under terminal cell (`column`, `row`).
///
/// `step` is the history step being shown, which decides how far the
/// history panel is scrolled.
pub fn hit_test(
    area: Rect,
    show_history: bool,
    step: usize,
    column: u16,
    row: u16,
) -> Option<ClickTarget> {
    let screen = layout(area, show_history);

    let cells = board_cells(screen.board);
    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|pos| contains(cells[pos.to_index()], column, row))
    {
        return Some(ClickTarget::Cell(pos));
    }

    let inner = Block::default().borders(Borders::ALL).inner(screen.history?);
    if contains(inner, column, row) {
        let offset = history_offset(inner.height, step);
        return Some(ClickTarget::Step(offset + usize::from(row - inner.y)));
    }

    None
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let screen = layout(f.area(), app.show_history());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, screen.title);

    let tagline = Paragraph::new(vec![
        Line::styled(
            "Feeling Bored? Want to interact with the person sitting across you?",
            Style::default().fg(Color::LightRed),
        ),
        Line::styled("Lack pen and paper?", Style::default().fg(Color::LightCyan)),
        Line::styled("Play Tic-Tac-Toe!", Style::default().fg(Color::LightGreen)),
    ])
    .alignment(Alignment::Center);
    f.render_widget(tagline, screen.tagline);

    render_board(f, screen.board, app.game(), app.cursor(), app.theme());

    if let Some(area) = screen.history {
        render_history(f, area, app.game());
    }

    let mut lines = vec![Line::styled(
        app.game().status_line(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(message) = app.message() {
        lines.push(Line::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, screen.status);

    let help = Paragraph::new(
        "1-9/Enter play | U undo | R redo | Home/End jump | N new | H history | Q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, screen.help);
}
