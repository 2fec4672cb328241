use crate::game_state::chess_types::*;
use crate::moves::move_rules::MoveRejection;

/// Knights jump; occupancy between the squares is irrelevant.
pub fn knight_can_move(from: Position, to: Position) -> Result<(), MoveRejection> {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    match (d_row, d_col) {
        (2, 1) | (1, 2) => Ok(()),
        _ => Err(MoveRejection::InvalidKnightMove),
    }
}
