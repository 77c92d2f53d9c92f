//! tictactoe_history - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_history::{AppConfig, Cli, Command, Intent, render_text, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { intents, json } => {
            init_stderr_logging(&config);
            run_replay(&config, &intents, json)
        }
    }
}

/// Sends logs to stderr so stdout carries only the replay output.
fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Replays intents and prints the resulting screen (or state) to stdout.
#[instrument(skip(config, intents), fields(count = intents.len()))]
fn run_replay(config: &AppConfig, intents: &[Intent], json: bool) -> Result<()> {
    info!("Replaying scripted intents");
    let state = Intent::replay(*config.initial_order(), intents);

    if json {
        let out = serde_json::to_string_pretty(&state).context("Failed to serialize game state")?;
        println!("{}", out);
    } else {
        print!("{}", render_text(&state));
    }
    Ok(())
}
