//! Crate root module declarations for the terminal chess project.
//!
//! The board model and the movement rule engine form the core; the parser,
//! renderer and terminal session are the front-end built on top of it.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_paths;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_generator;
}

pub mod terminal {
    pub mod session_config;
    pub mod terminal_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_parser;
    pub mod render_game_state;
}
