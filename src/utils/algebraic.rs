//! Square conversions for algebraic coordinates.
//!
//! Files `a`..`d` map to columns 0..3; ranks `1`..`4` map to rows 3..0, so
//! `a1` is the bottom-left cell on White's side.

use crate::game_errors::NotationError;
use crate::game_state::game_rules::BOARD_SIZE;
use crate::game_state::tic_tac_chec_types::Cell;

const LAST_FILE: u8 = b'a' + BOARD_SIZE as u8 - 1;
const LAST_RANK: u8 = b'1' + BOARD_SIZE as u8 - 1;

/// Convert algebraic notation (for example: "b2") to a cell.
pub fn algebraic_to_cell(square: &str) -> Result<Cell, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=LAST_FILE).contains(&file) || !(b'1'..=LAST_RANK).contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (LAST_RANK - rank) as i8;
    Ok(Cell::new(row, col))
}

/// Convert a cell to algebraic notation (for example: "b2").
pub fn cell_to_algebraic(cell: Cell) -> Result<String, NotationError> {
    let (row, col) = cell
        .indices()
        .ok_or_else(|| NotationError::InvalidSquare(cell.to_string()))?;

    let file_char = char::from(b'a' + col as u8);
    let rank_char = char::from(LAST_RANK - row as u8);
    Ok(format!("{file_char}{rank_char}"))
}
