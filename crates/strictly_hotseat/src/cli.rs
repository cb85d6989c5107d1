//! Command-line interface for strictly_hotseat.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Hotseat - two-player tic-tac-toe with undo and redo
#[derive(Parser, Debug)]
#[command(name = "strictly_hotseat")]
#[command(about = "Two-player tic-tac-toe on one keyboard, with undo and redo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./hotseat.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Write a JSON transcript of the game here on exit
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Start with the history panel hidden
    #[arg(long)]
    pub no_history: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let cli = Cli::parse_from([
            "strictly_hotseat",
            "--config",
            "my.toml",
            "--transcript",
            "game.json",
            "--no-history",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.transcript, Some(PathBuf::from("game.json")));
        assert_eq!(cli.log_file, None);
        assert!(cli.no_history);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
