//! Conversions between board positions and algebraic squares.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so `e2` is `(6, 4)`.

use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok(Position::new(row, col))
}

/// Convert an on-board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(pos: Position) -> Result<String, String> {
    if !pos.in_bounds() {
        return Err(format!(
            "Position out of bounds: row {} col {}",
            pos.row, pos.col
        ));
    }

    let file_char = char::from(b'a' + pos.col as u8);
    let rank_char = char::from(b'8' - pos.row as u8);

    Ok(format!("{file_char}{rank_char}"))
}
