//! Free-form move text to a pair of positions.
//!
//! Accepted coordinate forms are algebraic (`b2`) and 1-based numeric
//! `row,col` pairs (`7,2`, row 1 being the top of the board). Two coordinates
//! are separated by whitespace or a comma: `b2 b3`, `b2,b3`, `7,2 6,2`,
//! `b2 6,2`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Position, BOARD_SIZE};
use crate::utils::algebraic::algebraic_to_position;

lazy_static! {
    // A numeric pair binds its comma before the comma can act as a separator.
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"\d+\s*,\s*\d+|[^\s,]+").expect("token pattern should compile");
    static ref NUMERIC_PATTERN: Regex =
        Regex::new(r"^(\d+)\s*,\s*(\d+)$").expect("numeric pattern should compile");
    static ref ALGEBRAIC_PATTERN: Regex =
        Regex::new(r"^[a-hA-H][1-8]$").expect("algebraic pattern should compile");
}

/// Parse a move such as `"b2 b3"` into `(from, to)`.
pub fn parse_move(input: &str) -> ChessResult<(Position, Position)> {
    let trimmed = input.trim();
    let tokens: Vec<&str> = TOKEN_PATTERN
        .find_iter(trimmed)
        .map(|m| m.as_str())
        .collect();

    match tokens.as_slice() {
        [from, to] => Ok((parse_square(from)?, parse_square(to)?)),
        _ => Err(ChessErrors::InvalidMoveString(trimmed.to_owned())),
    }
}

/// Parse a single coordinate in either accepted form.
pub fn parse_square(token: &str) -> ChessResult<Position> {
    let token = token.trim();

    if ALGEBRAIC_PATTERN.is_match(token) {
        return algebraic_to_position(token)
            .map_err(|_| ChessErrors::InvalidCoordinate(token.to_owned()));
    }

    if let Some(caps) = NUMERIC_PATTERN.captures(token) {
        let row = one_based_index(&caps[1])
            .ok_or_else(|| ChessErrors::InvalidCoordinate(token.to_owned()))?;
        let col = one_based_index(&caps[2])
            .ok_or_else(|| ChessErrors::InvalidCoordinate(token.to_owned()))?;
        return Ok(Position::new(row, col));
    }

    Err(ChessErrors::InvalidCoordinate(token.to_owned()))
}

fn one_based_index(digits: &str) -> Option<i8> {
    let value: i8 = digits.parse().ok()?;
    (1..=BOARD_SIZE).contains(&value).then(|| value - 1)
}
