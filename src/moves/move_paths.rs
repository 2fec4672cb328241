//! Ray tracing between two squares for sliding pieces.

use crate::game_state::chess_types::*;

/// True when every square strictly between `from` and `to` is empty.
///
/// Squares that share no row, column or diagonal have no path and return
/// false.
pub fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return false;
    }

    let row_step = d_row.signum();
    let col_step = d_col.signum();

    let mut current = from.offset(row_step, col_step);
    while current != to {
        if !board.is_empty_at(current) {
            return false;
        }
        current = current.offset(row_step, col_step);
    }

    true
}
