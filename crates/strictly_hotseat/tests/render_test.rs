//! Tests rendering the full screen into an in-memory buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use strictly_hotseat::{App, Theme, draw};

fn render(app: &App) -> String {
    render_sized(app, 100, 40)
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();

    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

#[test]
fn test_initial_screen() {
    let app = App::new(Theme::default(), true);
    let screen = render(&app);

    assert!(screen.contains("Tic-Tac-Toe"));
    assert!(screen.contains("Lack pen and paper?"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Game start"));
    assert!(screen.contains("History 0/0"));
}

#[test]
fn test_winner_and_history_rows() {
    let mut app = App::new(Theme::default(), true);
    for c in ['1', '5', '2', '8', '3'] {
        press(&mut app, c);
    }
    let screen = render(&app);

    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("#1 X → Top-left"));
    assert!(screen.contains("#5 X → Top-right"));
    assert!(screen.contains("History 5/5"));
}

#[test]
fn test_tie_and_ignored_notice() {
    let mut app = App::new(Theme::default(), false);
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, c);
    }
    press(&mut app, '5');
    let screen = render(&app);

    assert!(screen.contains("It's a Tie!"));
    assert!(screen.contains("Square Center is already occupied"));
    assert!(!screen.contains("Game start"));
}

#[test]
fn test_standard_terminal_shows_latest_move_and_help() {
    let mut app = App::new(Theme::default(), true);
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, c);
    }
    let screen = render_sized(&app, 80, 24);

    assert!(screen.contains("History 9/9"));
    assert!(screen.contains("▶ #9 X → Bottom-right"));
    assert!(screen.contains("Q quit"));

    app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
    let screen = render_sized(&app, 80, 24);
    assert!(screen.contains("▶ Game start"));
}
