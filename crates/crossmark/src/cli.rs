//! Command-line interface for crossmark.

use clap::{Parser, Subcommand};
use crossmark_engine::Difficulty;

/// Crossmark - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "crossmark")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to config file (defaults to crossmark.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// AI difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Two people share the board; no AI
        #[arg(long)]
        two_player: bool,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit a random player against the AI and report the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// AI difficulty: easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for both players
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}
