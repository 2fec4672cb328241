//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by parsing, turn handling
//! and the terminal session. Parse and rule variants are expected during
//! normal play and are shown to the player before the turn is retried; only
//! `Io` ends a session early.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_rules::MoveRejection;

#[derive(Error, Debug)]
pub enum ChessErrors {
    /// Input could not be split into exactly two coordinates.
    #[error("cannot parse move, expected two coordinates: {0:?}")]
    InvalidMoveString(String),

    /// A single coordinate was neither `e4` nor `r,c` form, or was off the board.
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("no piece at source {0}")]
    NoPieceAtSource(Position),

    #[error("piece at {position} belongs to {owner}")]
    NotYourPiece { position: Position, owner: Color },

    #[error("illegal move: {0}")]
    IllegalMove(MoveRejection),

    /// A move was submitted after a king had already been captured.
    #[error("game is over, {0} won")]
    GameAlreadyOver(Color),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MoveRejection> for ChessErrors {
    fn from(rejection: MoveRejection) -> Self {
        ChessErrors::IllegalMove(rejection)
    }
}

pub type ChessResult<T> = Result<T, ChessErrors>;
