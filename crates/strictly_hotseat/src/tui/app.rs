//! Application state and logic.

use super::input::{Command, command_for_key, move_cursor};
use super::ui::{ClickTarget, Theme, hit_test};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use strictly_tictactoe::{GameState, Intent, Position, Transition, dispatch};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the single game and the presentation-only state around it
/// (cursor, panel visibility, last notice).
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    show_history: bool,
    theme: Theme,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(theme: Theme, show_history: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            show_history,
            theme,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the history panel is shown.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Mark colours.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Why the last request did nothing, if it did nothing.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = command_for_key(key) {
            self.handle_command(command);
        }
    }

    /// Handles a left click at terminal cell (`column`, `row`) of `area`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        match hit_test(area, self.show_history, self.game.step(), column, row) {
            Some(ClickTarget::Cell(pos)) => {
                self.cursor = pos;
                self.apply(Intent::CellActivated(pos));
            }
            Some(ClickTarget::Step(step)) if step < self.game.history_len() => {
                self.apply(Intent::JumpRequested(step));
            }
            _ => debug!("Click outside any target"),
        }
    }

    /// Handles a decoded command.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Play(pos) => {
                self.cursor = pos;
                self.apply(Intent::CellActivated(pos));
            }
            Command::Activate => self.apply(Intent::CellActivated(self.cursor)),
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::Undo => self.apply(Intent::UndoRequested),
            Command::Redo => self.apply(Intent::RedoRequested),
            Command::JumpToStart => self.apply(Intent::JumpRequested(0)),
            Command::JumpToLatest => {
                self.apply(Intent::JumpRequested(self.game.history_len() - 1))
            }
            Command::NewGame => {
                self.cursor = Position::Center;
                self.apply(Intent::NewGameRequested);
            }
            Command::ToggleHistory => self.show_history = !self.show_history,
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn apply(&mut self, intent: Intent) {
        let transition = dispatch(&mut self.game, intent);
        debug!(?intent, ?transition, "Intent handled");
        self.message = match transition {
            Transition::Ignored(reason) => Some(reason.to_string()),
            Transition::Moved(_) | Transition::Jumped { .. } | Transition::Restarted => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::{board_cells, layout};
    use crossterm::event::{KeyCode, KeyModifiers};
    use strictly_tictactoe::{Outcome, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new(Theme::default(), true);
        for c in ['1', '5', '2', '8', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game().outcome(), Outcome::Win(Player::X));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(Theme::default(), true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().current_snapshot().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_ignored_move_sets_message() {
        let mut app = App::new(Theme::default(), true);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Square Center is already occupied"));
        assert_eq!(app.game().step(), 1);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_undo_redo_and_jumps() {
        let mut app = App::new(Theme::default(), true);
        for c in ['1', '2', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.game().step(), 2);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.game().step(), 0);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message(), Some("Already at the start of the game"));
        press(&mut app, KeyCode::End);
        assert_eq!(app.game().step(), 3);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message(), Some("Already at the latest move"));
    }

    #[test]
    fn test_new_game_and_quit() {
        let mut app = App::new(Theme::default(), true);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);

        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_plays_and_jumps() {
        let area = Rect::new(0, 0, 100, 40);
        let mut app = App::new(Theme::default(), true);

        let cells = board_cells(layout(area, true).board);
        let corner = cells[Position::BottomRight.to_index()];
        app.handle_click(area, corner.x + 1, corner.y + 1);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.cursor(), Position::BottomRight);

        let panel = layout(area, true).history.expect("history shown");
        app.handle_click(area, panel.x + 2, panel.y + 1);
        assert_eq!(app.game().step(), 0);

        // Rows below the last recorded step do nothing.
        app.handle_click(area, panel.x + 2, panel.y + 6);
        assert_eq!(app.game().step(), 0);
    }
}
