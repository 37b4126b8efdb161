use super::{Board, Player, Seat};
use crate::config::{self, GameConfig};
use crate::error::{ConfigError, MoveError};

/// Result of an accepted drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece landed and the turn passed to the other player.
    Placed { row: usize, column: usize },
    /// The piece completed four in a row for this player.
    Win(Player),
    /// The piece filled the last empty cell.
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    Over,
}

/// Owns the board, the two players and whose turn it is.
///
/// `drop_piece` is the only mutating operation. It either applies a move in
/// full or rejects it with a [`MoveError`] and leaves everything untouched.
/// Once a win or a tie is reached the engine is over for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: Seat,
    outcome: Option<GameOutcome>,
}

impl GameEngine {
    /// Create a game on the standard 6x7 board. `first` moves first.
    pub fn new(first: Player, second: Player) -> Self {
        GameEngine {
            board: Board::default(),
            players: [first, second],
            current: Seat::First,
            outcome: None,
        }
    }

    /// Create a game on a `height` x `width` board.
    pub fn with_dimensions(
        first: Player,
        second: Player,
        height: usize,
        width: usize,
    ) -> Result<Self, ConfigError> {
        config::validate_dimensions(height, width)?;
        Ok(GameEngine {
            board: Board::new(height, width),
            players: [first, second],
            current: Seat::First,
            outcome: None,
        })
    }

    /// Create a game from loaded configuration
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_dimensions(
            Player::new(config.players.first.as_str()),
            Player::new(config.players.second.as_str()),
            config.board.height,
            config.board.width,
        )
    }

    /// Get current player
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_over() {
            GamePhase::Over
        } else {
            GamePhase::InProgress
        }
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Whether `seat` owns four in a row anywhere on the board
    pub fn check_win(&self, seat: Seat) -> bool {
        self.board.has_four(seat)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// The tie check runs before the win check, so a move that fills the
    /// board and completes four in a row at the same time is a `Tie`.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let seat = self.current;
        let row = self.board.drop_piece(column, seat)?;
        log::debug!("{} dropped into column {column}, landed on row {row}", self.player(seat));

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            log::info!("board full after {} moves, game tied", self.move_count());
            return Ok(DropOutcome::Tie);
        }

        if self.check_win(seat) {
            self.outcome = Some(GameOutcome::Winner(seat));
            log::info!("{} wins after {} moves", self.player(seat), self.move_count());
            return Ok(DropOutcome::Win(self.player(seat).clone()));
        }

        self.current = seat.other();
        Ok(DropOutcome::Placed { row, column })
    }
}
