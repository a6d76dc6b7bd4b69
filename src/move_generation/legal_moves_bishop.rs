//! Legal bishop destinations, clockwise from up-right.

use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::Cell;
use crate::move_generation::legal_move_shared::{generate_slide_moves, Direction};

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

pub fn generate_bishop_moves(game_state: &GameState, bishop: PieceId) -> GameResult<Vec<Cell>> {
    generate_slide_moves(game_state, bishop, &BISHOP_DIRECTIONS)
}
