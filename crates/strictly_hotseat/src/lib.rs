//! Strictly Hotseat - tic-tac-toe for two players sharing one terminal.
//!
//! # Architecture
//!
//! - **Game**: [`strictly_tictactoe::GameState`] owns history and rules
//! - **TUI**: ratatui front end turning keys and clicks into intents
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use strictly_hotseat::{HotseatConfig, init_tracing, run};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = HotseatConfig::load(None)?;
//! init_tracing(&config)?;
//! run(config, None)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, HotseatConfig};
pub use tui::{App, ClickTarget, Command, Screen, Theme, draw, hit_test, init_tracing, layout, run};
