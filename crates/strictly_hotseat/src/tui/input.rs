//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strictly_tictactoe::Position;
use tracing::instrument;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark on a specific square.
    Play(Position),
    /// Place a mark on the square under the cursor.
    Activate,
    /// Move the cursor one square.
    MoveCursor(KeyCode),
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
    /// Show the empty starting board.
    JumpToStart,
    /// Show the latest recorded move.
    JumpToLatest,
    /// Start over.
    NewGame,
    /// Show or hide the history panel.
    ToggleHistory,
    /// Leave the program.
    Quit,
}

/// Maps a key press to a command. Releases and unbound keys map to nothing.
#[instrument]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('z') => Some(Command::Undo),
            KeyCode::Char('y') => Some(Command::Redo),
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::MoveCursor(code))
        }
        KeyCode::Char('u') | KeyCode::Backspace => Some(Command::Undo),
        KeyCode::Char('r') => Some(Command::Redo),
        KeyCode::Home => Some(Command::JumpToStart),
        KeyCode::End => Some(Command::JumpToLatest),
        KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Char('h') => Some(Command::ToggleHistory),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // Edges stay put
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_positions() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('1'))),
            Some(Command::Play(Position::TopLeft))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('9'))),
            Some(Command::Play(Position::BottomRight))
        );
        assert_eq!(command_for_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('u'))), Some(Command::Undo));
        assert_eq!(command_for_key(press(KeyCode::Char('r'))), Some(Command::Redo));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(Command::Undo)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Command::Redo)
        );
        assert_eq!(command_for_key(press(KeyCode::Home)), Some(Command::JumpToStart));
        assert_eq!(command_for_key(press(KeyCode::End)), Some(Command::JumpToLatest));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }
}
