use crate::game_state::chess_types::*;
use crate::moves::move_rules::MoveRejection;

pub fn king_can_move(from: Position, to: Position) -> Result<(), MoveRejection> {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    if d_row <= 1 && d_col <= 1 {
        Ok(())
    } else {
        Err(MoveRejection::InvalidKingMove)
    }
}
