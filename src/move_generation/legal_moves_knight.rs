//! Legal knight destinations. Jumps ignore anything in between; only the
//! landing cell matters.

use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::Cell;
use crate::move_generation::legal_move_shared::{can_move_to, origin_of, Direction};

/// Up-right, right-up, right-down, down-right, down-left, left-down,
/// left-up, up-left.
pub const KNIGHT_JUMPS: [Direction; 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub fn generate_knight_moves(game_state: &GameState, knight: PieceId) -> GameResult<Vec<Cell>> {
    let from = origin_of(game_state, knight)?;

    Ok(KNIGHT_JUMPS
        .iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&cell| can_move_to(game_state, knight, cell).is_allowed())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::tic_tac_chec_types::{Color, Piece, PieceKind};

    const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);

    fn knight_moves_with(other: Option<Piece>) -> Vec<Cell> {
        let mut game = GameState::new_game();
        let knight = game.piece(WHITE_KNIGHT);
        game.board
            .set(Cell::new(1, 1), Some(knight))
            .expect("cell should be valid");
        if let Some(other) = other {
            let id = game.piece(other);
            game.board
                .set(Cell::new(3, 0), Some(id))
                .expect("cell should be valid");
        }
        generate_knight_moves(&game, knight).expect("knight is on board")
    }

    #[test]
    fn knight_moves_from_inner_cell() {
        assert_eq!(
            knight_moves_with(None),
            vec![
                Cell::new(0, 3),
                Cell::new(2, 3),
                Cell::new(3, 2),
                Cell::new(3, 0),
            ]
        );
    }

    #[test]
    fn knight_cannot_land_on_own_piece() {
        assert_eq!(
            knight_moves_with(Some(Piece::new(Color::White, PieceKind::Pawn))),
            vec![Cell::new(0, 3), Cell::new(2, 3), Cell::new(3, 2)]
        );
    }

    #[test]
    fn knight_captures_enemy_piece() {
        assert_eq!(
            knight_moves_with(Some(Piece::new(Color::Black, PieceKind::Pawn))),
            vec![
                Cell::new(0, 3),
                Cell::new(2, 3),
                Cell::new(3, 2),
                Cell::new(3, 0),
            ]
        );
    }

    #[test]
    fn knight_jumps_over_surrounding_pieces() {
        let mut game = GameState::new_game();
        let knight = game.piece(WHITE_KNIGHT);
        game.board
            .set(Cell::new(3, 3), Some(knight))
            .expect("cell should be valid");
        for (kind, cell) in [
            (PieceKind::Pawn, Cell::new(2, 3)),
            (PieceKind::Rook, Cell::new(3, 2)),
            (PieceKind::Bishop, Cell::new(2, 2)),
        ] {
            let id = game.piece(Piece::new(Color::Black, kind));
            game.board
                .set(cell, Some(id))
                .expect("cell should be valid");
        }

        let moves = generate_knight_moves(&game, knight).expect("knight is on board");
        assert_eq!(moves, vec![Cell::new(2, 1), Cell::new(1, 2)]);
    }
}
