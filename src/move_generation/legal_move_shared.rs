//! Helpers shared by the per-kind generators.

use crate::game_errors::{GameError, GameResult};
use crate::game_state::game_rules::BOARD_SIZE;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::Cell;

/// `(d_row, d_col)` step.
pub type Direction = (i8, i8);

/// What a piece would find on a target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Off the board or held by a piece of the same color.
    Blocked,
    Vacant,
    /// Held by an opposing piece.
    Capture,
}

impl Destination {
    #[inline]
    pub fn is_allowed(self) -> bool {
        self != Destination::Blocked
    }
}

#[inline]
pub fn can_move_to(game_state: &GameState, piece: PieceId, cell: Cell) -> Destination {
    match game_state.board.at(cell) {
        Err(_) => Destination::Blocked,
        Ok(None) => Destination::Vacant,
        Ok(Some(other)) if other.color() != piece.color() => Destination::Capture,
        Ok(Some(_)) => Destination::Blocked,
    }
}

/// Current cell of a piece that move generation was asked about.
#[inline]
pub fn origin_of(game_state: &GameState, piece: PieceId) -> GameResult<Cell> {
    game_state
        .board
        .find(piece)
        .ok_or(GameError::NotOnBoard(piece.descriptor()))
}

/// Sliding moves for rooks and bishops. Each ray stops before a friendly
/// piece and just after an opposing one.
pub fn generate_slide_moves(
    game_state: &GameState,
    piece: PieceId,
    directions: &[Direction],
) -> GameResult<Vec<Cell>> {
    let from = origin_of(game_state, piece)?;
    let mut moves = Vec::with_capacity(2 * (BOARD_SIZE - 1));

    for &(d_row, d_col) in directions {
        let mut cell = from;
        for _ in 0..BOARD_SIZE - 1 {
            cell = cell.offset(d_row, d_col);
            match can_move_to(game_state, piece, cell) {
                Destination::Blocked => break,
                Destination::Vacant => moves.push(cell),
                Destination::Capture => {
                    moves.push(cell);
                    break;
                }
            }
        }
    }

    Ok(moves)
}
