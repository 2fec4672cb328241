//! Enumeration of moves accepted by the rule engine.
//!
//! Brute force over all 64 destinations per piece; the board is small enough
//! that no attack tables are needed. Results follow board order (row 0 first).

use crate::game_state::chess_types::*;
use crate::moves::move_rules::is_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

fn all_squares() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
}

/// Destinations reachable by the piece on `from`. Empty when `from` is empty.
pub fn legal_destinations(board: &Board, from: Position) -> Vec<Position> {
    all_squares()
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}

/// Every legal move for `color`.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<CandidateMove> {
    let mut out = Vec::<CandidateMove>::with_capacity(64);

    for (from, piece) in board.occupied_squares() {
        if piece.color != color {
            continue;
        }
        for to in legal_destinations(board, from) {
            out.push(CandidateMove {
                from,
                to,
                piece,
                captured: board.get(to),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, legal_destinations};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let board = Board::new_game();
        assert_eq!(generate_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(generate_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn knight_on_b1_reaches_a3_and_c3() {
        let board = Board::new_game();
        let targets = legal_destinations(&board, Position::new(7, 1));
        assert_eq!(targets, vec![Position::new(5, 0), Position::new(5, 2)]);
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let board = Board::new_game();
        assert!(legal_destinations(&board, Position::new(4, 4)).is_empty());
    }

    #[test]
    fn captures_are_annotated() {
        let mut board = Board::empty();
        board.set(
            Position::new(4, 4),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        board.set(
            Position::new(4, 6),
            Some(Piece::new(PieceKind::Queen, Color::Black)),
        );
        let moves = generate_legal_moves(&board, Color::White);
        let capture = moves
            .iter()
            .find(|mv| mv.to == Position::new(4, 6))
            .expect("rook should be able to take the queen");
        assert_eq!(
            capture.captured,
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert!(moves.iter().all(|mv| mv.to != Position::new(4, 7)));
    }
}
