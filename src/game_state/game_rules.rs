//! Rule constants for the 4x4 board.

use crate::game_state::tic_tac_chec_types::{Color, PawnDirection};

pub const BOARD_SIZE: usize = 4;

/// Two colors times four kinds.
pub const PIECE_COUNT: usize = 8;

/// Four rows, four columns and the two diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Row 0 is at the top of the board.
pub const BLACK_SIDE_ROW: i8 = 0;
pub const WHITE_SIDE_ROW: i8 = BOARD_SIZE as i8 - 1;

/// Direction a pawn starts with, and falls back to whenever it is off the board.
#[inline]
pub const fn home_pawn_direction(color: Color) -> PawnDirection {
    match color {
        Color::White => PawnDirection::ToBlackSide,
        Color::Black => PawnDirection::ToWhiteSide,
    }
}
