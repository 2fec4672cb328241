//! Interactive two-player front-end and turn loop.
//!
//! Reads one move per line, enforces that the mover owns the piece, asks the
//! rule engine for legality and applies the move. User mistakes are printed
//! and the same side moves again; only I/O failures end the loop with an
//! error.

use std::io::{BufRead, Write};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::terminal::session_config::SessionConfig;
use crate::utils::move_parser::{parse_move, parse_square};
use crate::utils::render_game_state::{render_board, render_status};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const PROMPT: &str = "Enter move (e.g. b2 b3  or 1,2 2,2): ";
const HELP_TEXT: &str = "\
Moves:    two squares, algebraic (e2 e4, e2,e4) or row,col from the top (7,5 5,5)
Commands: moves <square>  list where the piece on <square> can go
          help            show this text
          quit | exit     leave the game";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { winner: Color, plies: u32 },
    Quit,
    /// Input closed before the game finished.
    Aborted,
}

enum TurnStep {
    Continue,
    Notice(String),
    Quit,
}

pub struct TerminalSession<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    game_state: GameState,
    side_to_move: Color,
    plies: u32,
    started_at: DateTime<Local>,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_game_state(input, output, config, GameState::new(), Color::White)
    }

    /// Start from an arbitrary position with `side_to_move` to play.
    pub fn with_game_state(
        input: R,
        output: W,
        config: SessionConfig,
        game_state: GameState,
        side_to_move: Color,
    ) -> Self {
        Self {
            input,
            output,
            config,
            game_state,
            side_to_move,
            plies: 0,
            started_at: Local::now(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn run(&mut self) -> ChessResult<SessionOutcome> {
        info!(started_at = %self.started_at.to_rfc3339(), "session started");

        loop {
            self.draw()?;

            if let Some(winner) = self.game_state.winner.filter(|_| self.game_state.game_over) {
                self.announce_winner(winner)?;
                return Ok(SessionOutcome::Won {
                    winner,
                    plies: self.plies,
                });
            }

            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                info!(plies = self.plies, "input closed, session aborted");
                return Ok(SessionOutcome::Aborted);
            };

            match self.handle_line(&line)? {
                TurnStep::Continue => {}
                TurnStep::Notice(message) => {
                    writeln!(self.output, "{message}")?;
                    self.pause()?;
                }
                TurnStep::Quit => {
                    writeln!(self.output, "Exiting...")?;
                    info!(plies = self.plies, "player quit");
                    return Ok(SessionOutcome::Quit);
                }
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> ChessResult<TurnStep> {
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();

        // Single-word commands must be the whole line.
        match trimmed {
            "" => return Ok(TurnStep::Continue),
            "quit" | "exit" => return Ok(TurnStep::Quit),
            "help" => return Ok(TurnStep::Notice(HELP_TEXT.to_owned())),
            _ => {}
        }

        match parts.next().unwrap_or_default() {
            "moves" => Ok(TurnStep::Notice(self.describe_moves(parts.next()))),
            _ => self.try_move(trimmed),
        }
    }

    fn describe_moves(&self, square: Option<&str>) -> String {
        let Some(square) = square else {
            return "Usage: moves <square>".to_owned();
        };
        let from = match parse_square(square) {
            Ok(pos) => pos,
            Err(err) => return format!("Invalid input: {err}"),
        };

        let targets = legal_destinations(&self.game_state.board, from);
        if targets.is_empty() {
            return format!("No legal moves from {from}");
        }
        let listed: Vec<String> = targets.iter().map(Position::to_string).collect();
        format!("{from}: {}", listed.join(" "))
    }

    fn try_move(&mut self, text: &str) -> ChessResult<TurnStep> {
        let (from, to) = match parse_move(text) {
            Ok(squares) => squares,
            Err(err) => {
                debug!(input = text, error = %err, "unparseable move");
                return Ok(TurnStep::Notice(format!("Invalid input: {err}")));
            }
        };

        let mover = self.side_to_move;
        match self.game_state.play_move(from, to, mover) {
            Ok(captured) => {
                self.plies += 1;
                debug!(
                    ply = self.plies,
                    side = %mover,
                    %from,
                    %to,
                    captured = ?captured.map(|piece| piece.kind),
                    "move applied"
                );
                if !self.game_state.game_over {
                    self.side_to_move = mover.opposite();
                }
                Ok(TurnStep::Continue)
            }
            Err(ChessErrors::Io(err)) => Err(ChessErrors::Io(err)),
            Err(err) => {
                debug!(side = %mover, %from, %to, error = %err, "move rejected");
                Ok(TurnStep::Notice(rejection_message(&err)))
            }
        }
    }

    fn draw(&mut self) -> ChessResult<()> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.output, "{}", render_status(self.side_to_move))?;
        writeln!(
            self.output,
            "{}",
            render_board(&self.game_state.board, self.config.style)
        )?;
        Ok(())
    }

    fn announce_winner(&mut self, winner: Color) -> ChessResult<()> {
        let elapsed = Local::now().signed_duration_since(self.started_at);
        writeln!(self.output, "Game over! Winner: {winner}")?;
        writeln!(
            self.output,
            "{} plies played in {}m {:02}s",
            self.plies,
            elapsed.num_minutes(),
            elapsed.num_seconds() % 60
        )?;
        info!(%winner, plies = self.plies, elapsed_s = elapsed.num_seconds(), "game over");
        Ok(())
    }

    fn pause(&mut self) -> ChessResult<()> {
        if !self.config.pause_after_error {
            return Ok(());
        }
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> ChessResult<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn rejection_message(err: &ChessErrors) -> String {
    match err {
        ChessErrors::NoPieceAtSource(_) => "No piece at source".to_owned(),
        ChessErrors::NotYourPiece { .. } => "Not your piece".to_owned(),
        ChessErrors::IllegalMove(rejection) => format!("Illegal move: {rejection}"),
        other => other.to_string(),
    }
}
