//! The rules engine: board ownership, move validation and terminal detection.

use super::action::MoveError;
use super::position::Position;
use super::rules::{self, Line};
use super::types::{Board, GameStatus, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game state.
///
/// The only mutation paths are [`GameState::place`] (and its `(row, col)`
/// twin [`GameState::apply_move`]) and [`GameState::reset`]. A move from a
/// person and a move from the AI go through the same path.
///
/// The current player flips after *every* accepted move, including the one
/// that ends the game. Once [`is_terminal`](Self::is_terminal) is true the
/// value of [`current_player`](Self::current_player) carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Creates a game from an arbitrary position with `to_move` to play.
    ///
    /// The status is evaluated immediately, so an injected finished board is
    /// terminal from the start.
    #[instrument]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            status: GameStatus::InProgress,
            winning_line: None,
        };
        state.update_status();
        state
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is terminal,
    /// [`MoveError::OutOfBounds`] when a coordinate is outside 0-2, and
    /// [`MoveError::SquareOccupied`] for a taken cell. Nothing changes on
    /// error.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let pos = self.check_move(row, col)?;
        self.place(pos)
    }

    /// Validates `(row, col)` without playing it.
    ///
    /// Applies the same checks in the same order as
    /// [`apply_move`](Self::apply_move): terminal, then bounds, then
    /// occupancy.
    ///
    /// # Errors
    ///
    /// The [`MoveError`] that `apply_move` would return.
    pub fn check_move(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.status.is_terminal() {
            debug!("Rejected move: game over");
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            debug!("Rejected move: out of bounds");
            MoveError::OutOfBounds { row, col }
        })?;

        if !self.board.is_empty(pos) {
            debug!("Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is terminal and
    /// [`MoveError::SquareOccupied`] for a taken cell.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            debug!("Rejected move: game over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!("Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.update_status();
        self.current_player = player.opponent();

        debug!(status = ?self.status, "Move applied");
        if let Some(outcome) = self.outcome() {
            info!(%outcome, "Game over");
        }
        Ok(())
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Re-evaluates status after the board changed.
    fn update_status(&mut self) {
        self.status = rules::evaluate(&self.board);
        self.winning_line = rules::winning_line(&self.board).map(|(line, _)| line);
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the player to move. Only meaningful while the game is running.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the result, or `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Returns the winning player, if a line was completed.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner())
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Bundles everything a presentation layer draws.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            winning_line: self.winning_line,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable view of a game handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameSnapshot {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<Line>,
}
