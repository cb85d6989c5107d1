//! Terminal UI for hotseat tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::Command;
pub use ui::{ClickTarget, Screen, Theme, draw, hit_test, layout};

use crate::config::HotseatConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Sends tracing output to the configured log file.
///
/// Writing to the terminal would corrupt the TUI, so logs always go to a
/// file. `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &HotseatConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Puts the terminal back in cooked mode on the main screen.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Restores the terminal when dropped. Armed once raw mode is on.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = restore_terminal() {
            error!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Restores the terminal before the panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Runs one hotseat session until the user quits.
///
/// When `transcript` is set, the game record is written there as JSON on
/// exit.
#[instrument(skip(config))]
pub fn run(config: HotseatConfig, transcript: Option<PathBuf>) -> Result<()> {
    let theme = config.theme()?;

    info!("Starting Strictly Hotseat");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(theme, *config.show_history());
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let saved = match transcript {
        Some(path) => write_transcript(&app, &path),
        None => Ok(()),
    };

    combine(res, saved)
}

/// Reports the game loop error first, noting a failed transcript write.
fn combine(res: Result<()>, saved: Result<()>) -> Result<()> {
    match (res, saved) {
        (Err(err), Err(save_err)) => {
            Err(err.context(format!("Transcript was not written: {save_err:#}")))
        }
        (res, saved) => res.and(saved),
    }
}

/// Blocks on terminal events, handling each to completion before redrawing.
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_click(area, column, row);
            }
            other => debug!(?other, "Unhandled terminal event"),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[instrument(skip(app), fields(path = %path.display()))]
fn write_transcript(app: &App, path: &std::path::Path) -> Result<()> {
    let json = app
        .game()
        .transcript()
        .to_json()
        .context("Failed to serialize transcript")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
    info!("Transcript written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_loop_error_wins_over_transcript_error() {
        let err = combine(Err(anyhow!("loop broke")), Err(anyhow!("disk full"))).unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain.last().map(String::as_str), Some("loop broke"));
        assert!(chain[0].contains("disk full"));
    }

    #[test]
    fn test_single_errors_pass_through() {
        assert!(combine(Ok(()), Ok(())).is_ok());
        let err = combine(Ok(()), Err(anyhow!("disk full"))).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        let err = combine(Err(anyhow!("loop broke")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "loop broke");
    }

    #[test]
    fn test_transcript_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let mut app = App::new(Theme::default(), true);
        app.handle_command(Command::Play(strictly_tictactoe::Position::Center));

        write_transcript(&app, &path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"step\": 1"));
    }
}
