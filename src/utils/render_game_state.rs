//! Terminal board renderer.
//!
//! Draws rank 8 at the top and rank 1 at the bottom with file letters above
//! and below. `Plain` output is escape-free and used by tests and dumb
//! terminals; `Ansi` output shades the squares and colors the pieces.

use colored::{ColoredString, Colorize};

use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "    a  b  c  d  e  f  g  h";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    Plain,
    #[default]
    Ansi,
}

/// Render the board to a string ready for terminal output.
pub fn render_board(board: &Board, style: RenderStyle) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        out.push_str(&format!("{rank}  "));

        for col in 0..BOARD_SIZE {
            let piece = board.get(Position::new(row, col));
            match style {
                RenderStyle::Plain => out.push_str(&plain_square(piece)),
                RenderStyle::Ansi => {
                    let light = (row + col) % 2 == 0;
                    out.push_str(&ansi_square(piece, light).to_string());
                }
            }
        }

        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str(FILE_LABELS);

    out
}

pub fn render_status(side_to_move: Color) -> String {
    format!("Current player: {side_to_move}")
}

fn plain_square(piece: Option<Piece>) -> String {
    match piece {
        Some(piece) => format!(" {} ", piece.symbol()),
        None => " . ".to_owned(),
    }
}

fn ansi_square(piece: Option<Piece>, light: bool) -> ColoredString {
    let cell = match piece {
        Some(piece) => {
            let text = format!(" {} ", piece.kind.symbol());
            match piece.color {
                Color::White => text.bright_blue().bold(),
                Color::Black => text.bright_red().bold(),
            }
        }
        None => " . ".normal(),
    };

    if light {
        cell.on_white()
    } else {
        cell.on_black()
    }
}
