//! Crossmark - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use crossmark::{Console, GameConfig, simulate};
use crossmark_engine::{AiPlanner, Difficulty, Match};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            two_player,
            seed,
        } => run_play(config, difficulty, two_player, seed),
        Command::Simulate {
            games,
            difficulty,
            seed,
        } => run_simulate(games, difficulty, seed),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    two_player: bool,
    seed: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_overrides(difficulty, two_player, seed);
    info!(?config, "Starting interactive play");

    let planner = match config.seed() {
        Some(seed) => AiPlanner::with_seed(*seed),
        None => AiPlanner::new(),
    };
    let game = Match::with_planner(config.match_settings(), planner);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(game, stdin.lock(), stdout.lock()).run()
}

/// Run a batch simulation and print the tally
#[instrument]
fn run_simulate(games: u32, difficulty: Difficulty, seed: u64) -> Result<()> {
    let score = simulate(games, difficulty, seed);
    println!("{} games at {}: {}", games, difficulty, score);
    Ok(())
}
