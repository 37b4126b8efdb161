//! Core Connect Four game logic: board representation, player identities, and
//! the game engine state machine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};
pub use engine::{DropOutcome, GameEngine, GameOutcome, GamePhase};
pub use player::{Player, Seat};

pub use crate::error::MoveError;
