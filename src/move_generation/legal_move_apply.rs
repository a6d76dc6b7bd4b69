//! The game state machine.
//!
//! `make_move` is the single mutating entry point. A call either fails without
//! touching the state, or fully applies a placement or movement, checks the
//! mover's lines for a win, and then either ends the game or advances the
//! turn and both pawn directions.

use log::{debug, info};

use crate::game_errors::{GameError, GameResult};
use crate::game_state::game_rules::{home_pawn_direction, BLACK_SIDE_ROW, WHITE_SIDE_ROW};
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::*;
use crate::move_generation::legal_move_generator::generate_piece_moves;
use crate::move_generation::move_generator::Action;

impl GameState {
    pub fn make_move(&mut self, selected: Piece, cell: Cell) -> GameResult<()> {
        if self.status == GameStatus::Over {
            return Err(GameError::GameOver);
        }
        if !cell.is_valid() {
            return Err(GameError::OutOfBounds(cell));
        }
        if selected.color != self.turn {
            return Err(GameError::NotYourTurn(self.turn));
        }

        let piece = self.pieces.resolve(selected);
        if self.board.contains(piece) {
            self.move_piece(piece, cell)?;
        } else {
            self.place_piece(piece, cell)?;
        }

        if self.completes_line(self.turn) {
            self.status = GameStatus::Over;
            self.winner = Some(self.turn);
            info!("game over, {} wins with {selected} to {cell}", self.turn);
        } else {
            self.next_turn();
        }

        Ok(())
    }

    fn move_piece(&mut self, piece: PieceId, cell: Cell) -> GameResult<()> {
        let moves = generate_piece_moves(self, piece)?;
        if !moves.contains(&cell) {
            return Err(GameError::IllegalMove {
                piece: piece.descriptor(),
                to: cell,
            });
        }

        if let Some(captured) = self.board.at(cell)? {
            let (mover, taken) = (piece.descriptor(), captured.descriptor());
            debug!("{mover} captures {taken} on {cell}");
        }
        self.board.move_piece(piece, cell)?;
        debug!("moved {} to {}", piece.descriptor(), cell);
        Ok(())
    }

    fn place_piece(&mut self, piece: PieceId, cell: Cell) -> GameResult<()> {
        if let Some(occupant) = self.board.at(cell)? {
            return Err(GameError::Occupied {
                cell,
                occupant: occupant.descriptor(),
            });
        }

        self.board.set(cell, Some(piece))?;
        debug!("placed {} on {}", piece.descriptor(), cell);
        Ok(())
    }

    /// Only the given color's lines are examined.
    pub(crate) fn completes_line(&self, color: Color) -> bool {
        self.board.lines().iter().any(|line| {
            line.iter()
                .all(|slot| matches!(slot, Some(piece) if piece.color() == color))
        })
    }

    pub(crate) fn next_turn(&mut self) {
        self.turn = self.turn.opposite();

        for color in ALL_COLORS {
            self.maybe_turn_pawn_direction(color);
        }
        let directions = self.pawn_directions;
        debug!("{} to move, pawn directions {directions:?}", self.turn);
    }

    fn maybe_turn_pawn_direction(&mut self, color: Color) {
        let pawn = self.pieces.get(color, PieceKind::Pawn);
        let direction = &mut self.pawn_directions[color.index()];

        match self.board.find(pawn) {
            Some(pos) => {
                if *direction == PawnDirection::ToBlackSide && pos.row == BLACK_SIDE_ROW {
                    *direction = direction.reversed();
                }
                if *direction == PawnDirection::ToWhiteSide && pos.row == WHITE_SIDE_ROW {
                    *direction = direction.reversed();
                }
            }
            None => *direction = home_pawn_direction(color),
        }
    }
}

/// Copy-and-apply used by whole-position enumeration.
pub fn apply_action(game_state: &GameState, action: &Action) -> GameResult<GameState> {
    let mut next = game_state.clone();
    next.make_move(action.piece, action.to)?;
    Ok(next)
}
