//! Tic-tac-toe with move history, time travel and a sortable move list.
//!
//! # Architecture
//!
//! - **Rules**: pure game logic lives in [`tictactoe_rules`]
//! - **Intents**: user requests ([`Intent`]) mapped onto state transitions
//! - **View**: the move list ([`view`]) plus two renderers, a ratatui
//!   terminal UI ([`tui`]) and plain text ([`render_text`])
//! - **Config**: optional TOML settings ([`AppConfig`])
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Intent, render_text};
//! use tictactoe_rules::{Position, SortOrder};
//!
//! let state = Intent::replay(
//!     SortOrder::Ascending,
//!     &[Intent::Play(Position::Center), Intent::ToggleSort],
//! );
//! assert!(render_text(&state).starts_with("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod intent;
mod render;
pub mod tui;
pub mod view;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use intent::{Intent, ParseIntentError};
pub use render::render_text;
