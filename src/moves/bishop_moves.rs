use crate::game_state::chess_types::*;
use crate::moves::move_paths::path_is_clear;
use crate::moves::move_rules::MoveRejection;

/// Diagonal rule shared by bishops and queens.
pub fn bishop_can_move(board: &Board, from: Position, to: Position) -> Result<(), MoveRejection> {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    if d_row != d_col {
        return Err(MoveRejection::NotDiagonal);
    }
    if !path_is_clear(board, from, to) {
        return Err(MoveRejection::PathBlocked);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::bishop_can_move;
    use crate::game_state::chess_types::{Board, Position};
    use crate::moves::move_rules::MoveRejection;

    #[test]
    fn bishop_cannot_leave_start_square_through_own_pawns() {
        let board = Board::new_game();
        let c1 = Position::new(7, 2);
        assert_eq!(
            bishop_can_move(&board, c1, Position::new(5, 4)),
            Err(MoveRejection::PathBlocked)
        );
    }

    #[test]
    fn bishop_runs_the_long_diagonal_on_an_empty_board() {
        let board = Board::empty();
        assert!(bishop_can_move(&board, Position::new(7, 0), Position::new(0, 7)).is_ok());
        assert!(bishop_can_move(&board, Position::new(0, 0), Position::new(7, 7)).is_ok());
    }

    #[test]
    fn bishop_rejects_knight_shaped_move() {
        let board = Board::empty();
        assert_eq!(
            bishop_can_move(&board, Position::new(4, 4), Position::new(2, 3)),
            Err(MoveRejection::NotDiagonal)
        );
    }
}
