//! Command-line interface for tictactoe_history.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Intent;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply scripted intents to a new game and print the result
    Replay {
        /// Intents in order: play:<0-8>, jump:<move>, sort, restart
        #[arg(required = true)]
        intents: Vec<Intent>,

        /// Print the final game state as JSON instead of the text screen
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rules::Position;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe_history"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_parses_intents() {
        let cli = Cli::try_parse_from([
            "tictactoe_history",
            "replay",
            "play:0",
            "jump:0",
            "sort",
            "--config",
            "game.toml",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Replay { intents, json }) => {
                assert_eq!(
                    intents,
                    vec![
                        Intent::Play(Position::TopLeft),
                        Intent::JumpTo(0),
                        Intent::ToggleSort
                    ]
                );
                assert!(!json);
            }
            other => panic!("Expected replay, got {:?}", other),
        }
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_replay_rejects_bad_intent() {
        assert!(Cli::try_parse_from(["tictactoe_history", "replay", "play:12"]).is_err());
    }
}
