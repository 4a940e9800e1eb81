//! Batch play of a random opponent against the AI.

use crossmark_engine::{AiPlanner, Difficulty, GameMode, Match, MatchSettings, Scoreboard};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, instrument};

/// Plays `games` games of uniformly random `X` against the AI as `O`.
///
/// The same seed always yields the same tally.
#[instrument]
pub fn simulate(games: u32, difficulty: Difficulty, seed: u64) -> Scoreboard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let settings = MatchSettings {
        mode: GameMode::VersusAi,
        difficulty,
    };
    let mut session = Match::with_planner(settings, AiPlanner::with_seed(seed.wrapping_add(1)));

    for _ in 0..games {
        while !session.state().is_terminal() {
            let empty = session.state().board().empty_positions();
            let Some(&pos) = empty.choose(&mut rng) else {
                break;
            };
            // `pos` is empty and the game is running, so the move is legal.
            if session.play(pos).is_err() {
                break;
            }
        }
        session.restart();
    }

    let score = session.scoreboard();
    info!(%score, "Simulation complete");
    score
}
