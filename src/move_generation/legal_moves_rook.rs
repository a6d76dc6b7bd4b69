//! Legal rook destinations.
//!
//! Rays are walked right, down, left, up; the result keeps that order.

use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::Cell;
use crate::move_generation::legal_move_shared::{generate_slide_moves, Direction};

pub const ROOK_DIRECTIONS: [Direction; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub fn generate_rook_moves(game_state: &GameState, rook: PieceId) -> GameResult<Vec<Cell>> {
    generate_slide_moves(game_state, rook, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_errors::GameError;
    use crate::game_state::tic_tac_chec_types::{Color, Piece, PieceKind};

    fn game_with(placements: &[(Piece, Cell)]) -> GameState {
        let mut game = GameState::new_game();
        for &(piece, cell) in placements {
            let id = game.piece(piece);
            game.board
                .set(cell, Some(id))
                .expect("cell should be valid");
        }
        game
    }

    const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);

    #[test]
    fn rook_moves_from_corner() {
        let game = game_with(&[(WHITE_ROOK, Cell::new(0, 0))]);
        let moves = generate_rook_moves(&game, game.piece(WHITE_ROOK)).expect("rook is on board");
        assert_eq!(
            moves,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(0, 3),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(3, 0),
            ]
        );
    }

    #[test]
    fn rook_stops_before_own_piece() {
        let game = game_with(&[
            (WHITE_ROOK, Cell::new(0, 0)),
            (Piece::new(Color::White, PieceKind::Pawn), Cell::new(0, 2)),
        ]);
        let moves = generate_rook_moves(&game, game.piece(WHITE_ROOK)).expect("rook is on board");
        assert_eq!(
            moves,
            vec![
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(3, 0),
            ]
        );
    }

    #[test]
    fn rook_captures_and_stops_on_enemy_piece() {
        let game = game_with(&[
            (WHITE_ROOK, Cell::new(0, 0)),
            (Piece::new(Color::Black, PieceKind::Pawn), Cell::new(0, 2)),
        ]);
        let moves = generate_rook_moves(&game, game.piece(WHITE_ROOK)).expect("rook is on board");
        assert_eq!(
            moves,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(3, 0),
            ]
        );
    }

    #[test]
    fn rook_in_reserve_has_no_moves() {
        let game = GameState::new_game();
        assert_eq!(
            generate_rook_moves(&game, game.piece(WHITE_ROOK)),
            Err(GameError::NotOnBoard(WHITE_ROOK))
        );
    }
}
