//! Move history panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strictly_tictactoe::GameState;

/// First history step visible in a panel `rows` tall.
///
/// Scrolls just far enough to keep `step` on screen.
pub fn history_offset(rows: u16, step: usize) -> usize {
    let rows = usize::from(rows.max(1));
    (step + 1).saturating_sub(rows)
}

/// Renders "Game start" plus one row per recorded move.
///
/// Row `i` is history step `i`. Steps after the shown one are the
/// redoable future and are dimmed. The list scrolls with the shown step.
pub fn render_history(f: &mut Frame, area: Rect, game: &GameState) {
    let step = game.step();
    let moves = game.moves();
    let labels = std::iter::once("Game start".to_string()).chain(
        moves
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("#{} {}", i + 1, mv)),
    );

    let items: Vec<ListItem> = labels
        .enumerate()
        .map(|(i, label)| {
            let (marker, style) = if i == step {
                ("▶ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else if i > step {
                ("  ", Style::default().fg(Color::DarkGray))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    let title = format!("History {}/{}", step, game.history_len() - 1);
    let block = Block::default().borders(Borders::ALL).title(title);
    let mut list_state =
        ListState::default().with_offset(history_offset(block.inner(area).height, step));
    list_state.select(Some(step));
    let list = List::new(items).block(block);
    f.render_stateful_widget(list, area, &mut list_state);
}
