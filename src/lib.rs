//! Crate root module declarations for the Tic-Tac-Chec rules engine.
//!
//! Tic-Tac-Chec is played on a 4x4 board with four chess pieces per side
//! (pawn, rook, bishop, knight). Pieces are dropped from reserve or moved with
//! chess moves; the first side to fill a row, column or diagonal with its own
//! pieces wins. This file exposes the game state, move generation, the
//! notation/rendering/persistence helpers, and the text front-ends so
//! binaries, benches, and tests can import stable module paths.

pub mod game_errors;

pub mod game_state {
    pub mod board;
    pub mod game_rules;
    pub mod game_state;
    pub mod piece_registry;
    pub mod tic_tac_chec_types;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_snapshot;
    pub mod move_command;
    pub mod piece_notation;
    pub mod random_playout;
    pub mod render_game_state;
}

pub mod interface {
    pub mod cli_app;
    pub mod session_config;
    pub mod text_session;
}
