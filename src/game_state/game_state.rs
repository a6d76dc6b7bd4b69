//! The game aggregate.
//!
//! `GameState` owns the board, the piece registry, whose turn it is, both
//! pawn directions and the terminal status. It is mutated only through
//! [`GameState::make_move`](crate::move_generation::legal_move_apply); the
//! accessors here are read-only views for renderers, persistence and tests.

use crate::game_errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::game_rules::home_pawn_direction;
use crate::game_state::piece_registry::{PieceId, PieceRegistry};
use crate::game_state::tic_tac_chec_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) pieces: PieceRegistry,
    pub(crate) turn: Color,
    // [color]
    pub(crate) pawn_directions: [PawnDirection; 2],
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, White to move, pawns heading toward the opposing side.
    pub fn new_game() -> Self {
        Self {
            board: Board::new(),
            pieces: PieceRegistry::new(),
            turn: Color::White,
            pawn_directions: [
                home_pawn_direction(Color::White),
                home_pawn_direction(Color::Black),
            ],
            status: GameStatus::Started,
            winner: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn pieces(&self) -> &PieceRegistry {
        &self.pieces
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn pawn_direction(&self, color: Color) -> PawnDirection {
        self.pawn_directions[color.index()]
    }

    /// Canonical handle for a descriptor.
    #[inline]
    pub fn piece(&self, piece: Piece) -> PieceId {
        self.pieces.resolve(piece)
    }

    pub fn piece_at(&self, cell: Cell) -> GameResult<Option<Piece>> {
        Ok(self.board.at(cell)?.map(|id| self.pieces.piece(id)))
    }

    pub fn location_of(&self, piece: Piece) -> Option<Cell> {
        self.board.find(self.piece(piece))
    }

    #[inline]
    pub fn is_on_board(&self, piece: Piece) -> bool {
        self.location_of(piece).is_some()
    }

    /// Pieces of `color` not on the board, in kind order.
    pub fn reserve(&self, color: Color) -> Vec<Piece> {
        self.pieces
            .ids_of(color)
            .filter(|id| !self.board.contains(*id))
            .map(|id| self.pieces.piece(id))
            .collect()
    }
}
