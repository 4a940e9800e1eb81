//! Tests for the computer opponent.

use crossmark_engine::ai::minimax;
use crossmark_engine::{AiPlanner, Board, Difficulty, GameState, Player, Position, Square};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::span;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, registry::LookupSpan};

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);
const E: Square = Square::Empty;

#[test]
fn test_hard_takes_immediate_win_over_block() {
    // X threatens (0, 2); O can win outright at (1, 2), which also ends the
    // game before X's threat matters.
    let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    let mut ai = AiPlanner::with_seed(0);
    assert_eq!(ai.choose_move_rc(&board, Difficulty::Hard), Some((1, 2)));

    let mut game = GameState::from_board(board, Player::O);
    game.apply_move(1, 2).unwrap();
    assert_eq!(game.winner(), Some(Player::O));
}

#[test]
fn test_hard_blocks_immediate_threat() {
    let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]);
    let mut ai = AiPlanner::with_seed(0);
    assert_eq!(ai.choose_move(&board, Difficulty::Hard), Some(Position::TopRight));
}

#[test]
fn test_hard_answers_center_with_corner() {
    let mut game = GameState::new();
    game.apply_move(1, 1).unwrap();

    let board = game.board();
    let mut ai = AiPlanner::with_seed(0);
    let choice = ai.choose_move(&board, Difficulty::Hard).unwrap();

    // Edges lose against a center opening; the first corner is the
    // first maximal cell in row-major order.
    assert_eq!(choice, Position::TopLeft);
    let mut after = board;
    after.set(choice, O);
    assert_eq!(minimax::score(&after, Player::O, Player::X), 0);
}

#[test]
fn test_hard_breaks_ties_in_row_major_order() {
    // Both empty cells complete a line for O; the first one is chosen.
    let board = Board::from_rows([[X, X, O], [X, O, O], [E, X, E]]);
    let mut ai = AiPlanner::with_seed(0);
    assert_eq!(ai.choose_move(&board, Difficulty::Hard), Some(Position::BottomLeft));
}

#[test]
fn test_planner_does_not_touch_the_board() {
    let game = {
        let mut g = GameState::new();
        g.apply_move(0, 0).unwrap();
        g
    };
    let before = game.clone();
    let mut ai = AiPlanner::with_seed(5);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let _ = ai.choose_move(&game.board(), difficulty);
    }
    assert_eq!(game, before);
}

/// Plays every possible X line against Hard O and checks O never loses.
fn explore(game: &GameState, ai: &mut AiPlanner, games: &mut u32) {
    if game.is_terminal() {
        *games += 1;
        assert_ne!(game.winner(), Some(Player::X), "lost:\n{}", game.board().display());
        return;
    }

    for pos in game.board().empty_positions() {
        let mut next = game.clone();
        next.place(pos).unwrap();
        if !next.is_terminal() {
            let reply = ai.choose_move(&next.board(), Difficulty::Hard).unwrap();
            next.place(reply).unwrap();
        }
        explore(&next, ai, games);
    }
}

#[test]
fn test_hard_never_loses_to_any_x_strategy() {
    let mut ai = AiPlanner::with_seed(0);
    let mut games = 0;
    explore(&GameState::new(), &mut ai, &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_never_loses_to_random_x() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut ai = AiPlanner::with_seed(99);

    for _ in 0..50 {
        let mut game = GameState::new();
        while !game.is_terminal() {
            let pos = *game.board().empty_positions().choose(&mut rng).unwrap();
            game.place(pos).unwrap();
            if !game.is_terminal() {
                let reply = ai.choose_move(&game.board(), Difficulty::Hard).unwrap();
                game.place(reply).unwrap();
            }
        }
        assert_ne!(game.winner(), Some(Player::X));
    }
}

#[test]
fn test_medium_mixes_random_and_searched_moves() {
    // O can win at (1, 2). Hard always takes it; Easy only sometimes.
    let board = Board::from_rows([[X, X, O], [O, O, E], [X, E, E]]);
    let mut ai = AiPlanner::with_seed(11);

    let mut wins = 0;
    let trials = 400;
    for _ in 0..trials {
        if ai.choose_move(&board, Difficulty::Medium) == Some(Position::MiddleRight) {
            wins += 1;
        }
    }
    // Expected rate 0.5 + 0.5 / 3 = 2/3.
    assert!(wins > trials / 2, "wins = {}", wins);
    assert!(wins < trials, "wins = {}", wins);
}

/// Counts spans that pass the layer's filter.
struct SpanCounter(Arc<AtomicUsize>);

impl<S> Layer<S> for SpanCounter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn test_search_opens_few_spans_at_info() {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry()
        .with(SpanCounter(Arc::clone(&count)).with_filter(LevelFilter::INFO));

    let choice = tracing::subscriber::with_default(subscriber, || {
        let mut board = Board::new();
        board.set(Position::Center, X);
        AiPlanner::with_seed(0).choose_move(&board, Difficulty::Hard)
    });

    assert_eq!(choice, Some(Position::TopLeft));
    // Thousands of nodes are searched; only the entry points open spans.
    assert!(count.load(Ordering::Relaxed) < 50);
}
