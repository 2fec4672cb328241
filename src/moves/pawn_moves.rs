use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::moves::move_rules::MoveRejection;

/// Pawn pushes and diagonal captures. No en-passant and no promotion.
pub fn pawn_can_move(
    board: &Board,
    from: Position,
    to: Position,
    color: Color,
) -> Result<(), MoveRejection> {
    let dir = pawn_direction(color);

    if to.col == from.col {
        if to.row == from.row + dir && board.is_empty_at(to) {
            return Ok(());
        }
        if from.row == pawn_start_row(color) && to.row == from.row + 2 * dir {
            let middle = from.offset(dir, 0);
            if board.is_empty_at(middle) && board.is_empty_at(to) {
                return Ok(());
            }
        }
        return Err(MoveRejection::PawnBlocked);
    }

    if (to.col - from.col).abs() == 1 && to.row == from.row + dir {
        return match board.get(to) {
            Some(target) if target.color != color => Ok(()),
            _ => Err(MoveRejection::PawnNothingToCapture),
        };
    }

    Err(MoveRejection::InvalidPawnMove)
}

#[cfg(test)]
mod tests {
    use super::pawn_can_move;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};
    use crate::moves::move_rules::MoveRejection;

    #[test]
    fn white_pawn_pushes_one_or_two_from_start() {
        let board = Board::new_game();
        let a2 = Position::new(6, 0);
        assert!(pawn_can_move(&board, a2, Position::new(5, 0), Color::White).is_ok());
        assert!(pawn_can_move(&board, a2, Position::new(4, 0), Color::White).is_ok());
        assert_eq!(
            pawn_can_move(&board, a2, Position::new(3, 0), Color::White),
            Err(MoveRejection::PawnBlocked)
        );
    }

    #[test]
    fn black_pawn_moves_toward_row_seven() {
        let board = Board::new_game();
        let e7 = Position::new(1, 4);
        assert!(pawn_can_move(&board, e7, Position::new(3, 4), Color::Black).is_ok());
        assert_eq!(
            pawn_can_move(&board, e7, Position::new(0, 4), Color::Black),
            Err(MoveRejection::PawnBlocked)
        );
    }

    #[test]
    fn double_push_only_from_start_row() {
        let mut board = Board::empty();
        board.set(
            Position::new(5, 2),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        assert_eq!(
            pawn_can_move(&board, Position::new(5, 2), Position::new(3, 2), Color::White),
            Err(MoveRejection::PawnBlocked)
        );
    }

    #[test]
    fn double_push_needs_empty_middle_square() {
        let mut board = Board::new_game();
        board.set(
            Position::new(5, 3),
            Some(Piece::new(PieceKind::Knight, Color::Black)),
        );
        assert_eq!(
            pawn_can_move(&board, Position::new(6, 3), Position::new(4, 3), Color::White),
            Err(MoveRejection::PawnBlocked)
        );
    }

    #[test]
    fn double_push_onto_occupied_square_is_blocked() {
        let mut board = Board::new_game();
        board.set(
            Position::new(3, 0),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        assert_eq!(
            pawn_can_move(&board, Position::new(1, 0), Position::new(3, 0), Color::Black),
            Err(MoveRejection::PawnBlocked)
        );
    }

    #[test]
    fn black_pawn_captures_toward_row_seven() {
        let mut board = Board::new_game();
        board.set(
            Position::new(2, 3),
            Some(Piece::new(PieceKind::Knight, Color::White)),
        );
        assert!(
            pawn_can_move(&board, Position::new(1, 4), Position::new(2, 3), Color::Black).is_ok()
        );
    }

    #[test]
    fn black_pawn_cannot_capture_backward() {
        let mut board = Board::empty();
        board.set(
            Position::new(1, 2),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        board.set(
            Position::new(0, 3),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        assert_eq!(
            pawn_can_move(&board, Position::new(1, 2), Position::new(0, 3), Color::Black),
            Err(MoveRejection::InvalidPawnMove)
        );
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let mut board = Board::new_game();
        board.set(
            Position::new(5, 4),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        assert_eq!(
            pawn_can_move(&board, Position::new(6, 4), Position::new(5, 4), Color::White),
            Err(MoveRejection::PawnBlocked)
        );
    }

    #[test]
    fn diagonal_step_requires_enemy_piece() {
        let mut board = Board::new_game();
        let e2 = Position::new(6, 4);
        assert_eq!(
            pawn_can_move(&board, e2, Position::new(5, 5), Color::White),
            Err(MoveRejection::PawnNothingToCapture)
        );
        board.set(
            Position::new(5, 5),
            Some(Piece::new(PieceKind::Bishop, Color::Black)),
        );
        assert!(pawn_can_move(&board, e2, Position::new(5, 5), Color::White).is_ok());
    }

    #[test]
    fn backward_and_wide_moves_are_invalid() {
        let mut board = Board::empty();
        board.set(
            Position::new(4, 4),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        let e4 = Position::new(4, 4);
        assert_eq!(
            pawn_can_move(&board, e4, Position::new(5, 5), Color::White),
            Err(MoveRejection::InvalidPawnMove)
        );
        assert_eq!(
            pawn_can_move(&board, e4, Position::new(3, 6), Color::White),
            Err(MoveRejection::InvalidPawnMove)
        );
    }
}
