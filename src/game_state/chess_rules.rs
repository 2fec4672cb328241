//! Canonical chess-rule constants.
//!
//! Stores the starting layout and the per-color pawn geometry used by board
//! setup and by the pawn rule.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank order from column 0 to column 7, identical for both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_BACK_ROW: i8 = 0;
pub const BLACK_PAWN_ROW: i8 = 1;
pub const WHITE_PAWN_ROW: i8 = 6;
pub const WHITE_BACK_ROW: i8 = 7;

/// Row delta of a single forward pawn step.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which a pawn may advance two squares.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => WHITE_PAWN_ROW,
        Color::Black => BLACK_PAWN_ROW,
    }
}
