use crate::game_state::chess_types::*;
use crate::moves::move_paths::path_is_clear;
use crate::moves::move_rules::MoveRejection;

/// Straight-line rule shared by rooks and queens.
pub fn rook_can_move(board: &Board, from: Position, to: Position) -> Result<(), MoveRejection> {
    if from.row != to.row && from.col != to.col {
        return Err(MoveRejection::NotStraight);
    }
    if !path_is_clear(board, from, to) {
        return Err(MoveRejection::PathBlocked);
    }
    Ok(())
}
