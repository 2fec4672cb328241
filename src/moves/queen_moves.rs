use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_can_move;
use crate::moves::move_rules::MoveRejection;
use crate::moves::rook_moves::rook_can_move;

/// Queen = rook rule or bishop rule. A rejection reports the diagonal reason.
pub fn queen_can_move(board: &Board, from: Position, to: Position) -> Result<(), MoveRejection> {
    if rook_can_move(board, from, to).is_ok() {
        return Ok(());
    }
    bishop_can_move(board, from, to)
}
