//! Legal pawn destinations.
//!
//! A pawn steps one row along its color's current direction onto an empty
//! cell, or captures one row forward and one column to either side. It never
//! captures straight ahead and never moves diagonally onto an empty cell.

use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::Cell;
use crate::move_generation::legal_move_shared::{can_move_to, origin_of, Destination};

pub fn generate_pawn_moves(game_state: &GameState, pawn: PieceId) -> GameResult<Vec<Cell>> {
    let from = origin_of(game_state, pawn)?;
    let step = game_state.pawn_direction(pawn.color()).row_step();
    let mut moves = Vec::with_capacity(3);

    let ahead = from.offset(step, 0);
    if can_move_to(game_state, pawn, ahead) == Destination::Vacant {
        moves.push(ahead);
    }

    // left capture first, then right
    for d_col in [-1, 1] {
        let target = from.offset(step, d_col);
        if can_move_to(game_state, pawn, target) == Destination::Capture {
            moves.push(target);
        }
    }

    Ok(moves)
}
