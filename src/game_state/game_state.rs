//! Board plus game-over status.
//!
//! `GameState` is constructed by the turn driver and mutated in place. It does
//! not track whose turn it is; the driver passes the mover to `play_move`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_rules::can_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub game_over: bool,
    /// `Some` exactly when `game_over` is set.
    pub winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::new_game())
    }

    #[inline]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            game_over: false,
            winner: None,
        }
    }

    /// Ends the game when `captured` is a king.
    pub fn resolve_capture(&mut self, captured: Option<Piece>, mover: Color) {
        if let Some(Piece {
            kind: PieceKind::King,
            ..
        }) = captured
        {
            self.game_over = true;
            self.winner = Some(mover);
        }
    }

    /// Validate and execute one move for `mover`.
    ///
    /// Returns the captured piece, if any. On error nothing is modified.
    pub fn play_move(
        &mut self,
        from: Position,
        to: Position,
        mover: Color,
    ) -> ChessResult<Option<Piece>> {
        if let Some(winner) = self.winner.filter(|_| self.game_over) {
            return Err(ChessErrors::GameAlreadyOver(winner));
        }
        let piece = self
            .board
            .get(from)
            .ok_or(ChessErrors::NoPieceAtSource(from))?;
        if piece.color != mover {
            return Err(ChessErrors::NotYourPiece {
                position: from,
                owner: piece.color,
            });
        }
        can_move(&self.board, from, to)?;

        let captured = self.board.move_piece(from, to);
        self.resolve_capture(captured, mover);
        Ok(captured)
    }
}
