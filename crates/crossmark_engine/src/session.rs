//! A running match: one game, one computer opponent, and a score tally.
//!
//! This is the caller-side control flow the engine expects: apply the
//! person's move, and if the game goes on and the AI is to move, ask the
//! planner against a board snapshot and apply its answer the same way.

use crate::ai::{AiPlanner, Difficulty};
use crate::{GameState, GameStatus, MoveError, Outcome, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays the second mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// One person against the computer.
    #[default]
    VersusAi,
    /// Two people sharing the board.
    TwoPlayer,
}

/// User-configurable settings for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Opponent kind.
    pub mode: GameMode,
    /// AI difficulty (ignored in two-player mode).
    pub difficulty: Difficulty,
}

/// Win/draw tally across games in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} - O {} ({} drawn)",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// What happened during one call to [`Match::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Turn {
    /// Cell the person played.
    played: Position,
    /// The computer's reply, if it moved.
    reply: Option<Position>,
    /// Status after both moves.
    status: GameStatus,
}

/// A sequence of games against one opponent.
#[derive(Debug, Clone)]
pub struct Match {
    game: GameState,
    planner: AiPlanner,
    settings: MatchSettings,
    scoreboard: Scoreboard,
}

impl Match {
    /// Starts a match with a planner seeded from the operating system.
    #[instrument]
    pub fn new(settings: MatchSettings) -> Self {
        Self::with_planner(settings, AiPlanner::new())
    }

    /// Starts a match with the given planner.
    #[instrument(skip(planner))]
    pub fn with_planner(settings: MatchSettings, planner: AiPlanner) -> Self {
        info!(mode = %settings.mode, difficulty = %settings.difficulty, "Starting match");
        Self {
            game: GameState::new(),
            planner,
            settings,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Plays `pos` for the side to move, then lets the AI reply if it is
    /// the AI's turn.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from the person's move. Nothing changes on
    /// error.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<Turn, MoveError> {
        self.game.place(pos)?;
        self.finish_if_over();

        let reply = if self.ai_to_move() {
            self.ai_move()
        } else {
            None
        };

        Ok(Turn {
            played: pos,
            reply,
            status: self.game.status(),
        })
    }

    /// Same as [`play`](Self::play) for `(row, col)` input.
    ///
    /// # Errors
    ///
    /// Same errors, in the same order, as [`GameState::apply_move`].
    pub fn play_rc(&mut self, row: usize, col: usize) -> Result<Turn, MoveError> {
        let pos = self.game.check_move(row, col)?;
        self.play(pos)
    }

    /// True when the game is running, the AI is playing, and it holds the
    /// move.
    pub fn ai_to_move(&self) -> bool {
        self.settings.mode == GameMode::VersusAi
            && !self.game.is_terminal()
            && self.game.current_player() == self.planner.mark()
    }

    /// Lets the AI move now, if it is its turn.
    #[instrument(skip(self))]
    pub fn ai_move(&mut self) -> Option<Position> {
        if !self.ai_to_move() {
            return None;
        }
        let snapshot = self.game.board();
        let choice = self
            .planner
            .choose_move(&snapshot, self.settings.difficulty)?;
        // The planner only returns empty cells of a running game.
        self.game.place(choice).ok()?;
        self.finish_if_over();
        Some(choice)
    }

    /// Abandons the current game and starts a fresh one.
    ///
    /// Unfinished games are not counted.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset();
    }

    /// Changes difficulty; applies from the next AI move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = %self.settings.difficulty, to = %difficulty, "Difficulty changed");
        self.settings.difficulty = difficulty;
    }

    /// Changes mode.
    ///
    /// Switching to [`GameMode::VersusAi`] while the AI's mark is to move
    /// lets it reply at once; the reply is returned.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> Option<Position> {
        debug!(from = %self.settings.mode, to = %mode, "Mode changed");
        self.settings.mode = mode;
        self.ai_move()
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// Active settings.
    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    /// Tally of finished games.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    fn finish_if_over(&mut self) {
        if let Some(outcome) = self.game.outcome() {
            self.scoreboard.record(outcome);
            info!(%outcome, score = %self.scoreboard, "Game finished");
        }
    }
}
