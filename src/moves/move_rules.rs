//! Movement legality for a single candidate move.
//!
//! `can_move` checks the shared preconditions (bounds, source occupancy,
//! distinct squares, no capture of an own piece) and then dispatches to the
//! per-kind rule. Check, castling, en-passant and promotion are not modelled.
//! The function only reads the board.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_can_move;
use crate::moves::king_moves::king_can_move;
use crate::moves::knight_moves::knight_can_move;
use crate::moves::pawn_moves::pawn_can_move;
use crate::moves::queen_moves::queen_can_move;
use crate::moves::rook_moves::rook_can_move;

/// Why a candidate move was refused.
///
/// The `Display` text is meant for the player; callers should branch on the
/// variant, never on the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    NoPieceAtSource,
    SameSquare,
    OwnPieceAtTarget,
    PawnBlocked,
    PawnNothingToCapture,
    InvalidPawnMove,
    NotStraight,
    NotDiagonal,
    PathBlocked,
    InvalidKnightMove,
    InvalidKingMove,
}

impl MoveRejection {
    pub const fn reason(self) -> &'static str {
        match self {
            MoveRejection::OutOfBounds => "out of bounds",
            MoveRejection::NoPieceAtSource => "no piece at source",
            MoveRejection::SameSquare => "same square",
            MoveRejection::OwnPieceAtTarget => "cannot capture own piece",
            MoveRejection::PawnBlocked => "blocked or invalid pawn forward move",
            MoveRejection::PawnNothingToCapture => "no piece to capture diagonally",
            MoveRejection::InvalidPawnMove => "invalid pawn move",
            MoveRejection::NotStraight => "not straight",
            MoveRejection::NotDiagonal => "not diagonal",
            MoveRejection::PathBlocked => "path blocked",
            MoveRejection::InvalidKnightMove => "invalid knight move",
            MoveRejection::InvalidKingMove => "king moves one square",
        }
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for MoveRejection {}

pub fn can_move(board: &Board, from: Position, to: Position) -> Result<(), MoveRejection> {
    if !from.in_bounds() || !to.in_bounds() {
        return Err(MoveRejection::OutOfBounds);
    }
    let piece = board.get(from).ok_or(MoveRejection::NoPieceAtSource)?;
    if from == to {
        return Err(MoveRejection::SameSquare);
    }
    if let Some(target) = board.get(to) {
        if target.color == piece.color {
            return Err(MoveRejection::OwnPieceAtTarget);
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_can_move(board, from, to, piece.color),
        PieceKind::Rook => rook_can_move(board, from, to),
        PieceKind::Bishop => bishop_can_move(board, from, to),
        PieceKind::Queen => queen_can_move(board, from, to),
        PieceKind::Knight => knight_can_move(from, to),
        PieceKind::King => king_can_move(from, to),
    }
}

#[inline]
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    can_move(board, from, to).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{can_move, is_legal_move, MoveRejection};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};

    #[test]
    fn preconditions_short_circuit_in_order() {
        let board = Board::new_game();
        assert_eq!(
            can_move(&board, Position::new(4, 4), Position::new(8, 4)),
            Err(MoveRejection::OutOfBounds)
        );
        // Out of bounds wins over an empty source.
        assert_eq!(
            can_move(&board, Position::new(-1, 0), Position::new(4, 4)),
            Err(MoveRejection::OutOfBounds)
        );
        assert_eq!(
            can_move(&board, Position::new(4, 4), Position::new(4, 4)),
            Err(MoveRejection::NoPieceAtSource)
        );
        assert_eq!(
            can_move(&board, Position::new(7, 4), Position::new(7, 4)),
            Err(MoveRejection::SameSquare)
        );
        assert_eq!(
            can_move(&board, Position::new(7, 0), Position::new(7, 1)),
            Err(MoveRejection::OwnPieceAtTarget)
        );
    }

    #[test]
    fn start_position_pawn_and_knight_moves() {
        let board = Board::new_game();
        assert!(is_legal_move(&board, Position::new(6, 0), Position::new(5, 0)));
        assert!(is_legal_move(&board, Position::new(6, 0), Position::new(4, 0)));
        assert!(is_legal_move(&board, Position::new(0, 1), Position::new(2, 2)));
        assert!(is_legal_move(&board, Position::new(7, 6), Position::new(5, 5)));
    }

    #[test]
    fn rook_captures_king_along_empty_row() {
        let mut board = Board::new_game();
        board.set(
            Position::new(4, 4),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        board.set(
            Position::new(4, 0),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        assert_eq!(can_move(&board, Position::new(4, 0), Position::new(4, 4)), Ok(()));
    }

    #[test]
    fn can_move_does_not_touch_the_board() {
        let board = Board::new_game();
        let before = board.clone();
        for _ in 0..3 {
            let _ = can_move(&board, Position::new(6, 4), Position::new(4, 4));
            let _ = can_move(&board, Position::new(7, 3), Position::new(3, 7));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn rejection_reasons_are_human_readable() {
        assert_eq!(MoveRejection::PathBlocked.to_string(), "path blocked");
        assert_eq!(
            MoveRejection::OwnPieceAtTarget.to_string(),
            "cannot capture own piece"
        );
    }
}
