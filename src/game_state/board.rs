//! Mailbox board representation.
//!
//! `Board` stores one optional piece per square and exposes lenient
//! accessors: coordinates off the board read as empty and writes to them are
//! ignored. Legality is never checked here; see `moves::move_rules`.

use crate::game_state::chess_rules::{
    BACK_RANK, BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [row][col]
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Board with no pieces, for scenario setup.
    #[inline]
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            board.set(
                Position::new(BLACK_BACK_ROW, col),
                Some(Piece::new(kind, Color::Black)),
            );
            board.set(
                Position::new(BLACK_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set(
                Position::new(WHITE_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set(
                Position::new(WHITE_BACK_ROW, col),
                Some(Piece::new(kind, Color::White)),
            );
        }
        board
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.in_bounds() {
            self.squares[pos.row as usize][pos.col as usize] = piece;
        }
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Relocate whatever stands on `from` to `to` and return the previous
    /// occupant of `to`. Nothing changes when either square is off the board.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        if !from.in_bounds() || !to.in_bounds() {
            return None;
        }
        let captured = self.get(to);
        self.set(to, self.get(from));
        self.set(from, None);
        captured
    }

    /// All occupied squares, row by row from row 0.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.occupied_squares()
            .filter(|(_, piece)| piece.color == color)
            .count()
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.occupied_squares()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}
