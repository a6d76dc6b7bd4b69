//! Legal move enumeration.
//!
//! `generate_piece_moves` answers "where can this on-board piece go" by
//! dispatching to the per-kind generators. `generate_legal_actions` lists
//! every legal `make_move` call for the side to move: movements for pieces on
//! the board, and a placement on every empty cell for each reserve piece.

use crate::game_errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::{Cell, PieceKind};
use crate::move_generation::legal_move_apply::apply_action;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{Action, ActionKind, GeneratedMove, MoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> GameResult<Vec<GeneratedMove>> {
        generate_legal_actions(game_state)?
            .into_iter()
            .map(|action| {
                Ok(GeneratedMove {
                    action,
                    game_after_move: apply_action(game_state, &action)?,
                })
            })
            .collect()
    }
}

/// Destinations for a piece already on the board. Turn ownership is not
/// checked here.
pub fn generate_piece_moves(game_state: &GameState, piece: PieceId) -> GameResult<Vec<Cell>> {
    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(game_state, piece),
        PieceKind::Rook => generate_rook_moves(game_state, piece),
        PieceKind::Bishop => generate_bishop_moves(game_state, piece),
        PieceKind::Knight => generate_knight_moves(game_state, piece),
    }
}

/// Every legal action for the side to move, pieces in kind order, cells in
/// generator order (movements) or row-major order (placements). Empty once
/// the game is over.
pub fn generate_legal_actions(game_state: &GameState) -> GameResult<Vec<Action>> {
    let mut actions = Vec::new();
    if game_state.is_over() {
        return Ok(actions);
    }

    for id in game_state.pieces.ids_of(game_state.turn) {
        let piece = game_state.pieces.piece(id);

        if game_state.board.contains(id) {
            for to in generate_piece_moves(game_state, id)? {
                let kind = if game_state.board.at(to)?.is_some() {
                    ActionKind::Capture
                } else {
                    ActionKind::Movement
                };
                actions.push(Action { piece, to, kind });
            }
        } else {
            for to in Board::cells() {
                if game_state.board.at(to)?.is_none() {
                    actions.push(Action {
                        piece,
                        to,
                        kind: ActionKind::Placement,
                    });
                }
            }
        }
    }

    Ok(actions)
}
