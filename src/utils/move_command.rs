//! `"<piece> <square>"` command lines, as typed by a player.

use crate::game_errors::NotationError;
use crate::game_state::tic_tac_chec_types::{Cell, Piece};
use crate::move_generation::move_generator::Action;
use crate::utils::algebraic::{algebraic_to_cell, cell_to_algebraic};
use crate::utils::piece_notation::{piece_from_code, piece_to_code};

pub fn parse_move_command(line: &str) -> Result<(Piece, Cell), NotationError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [piece_field, square_field] = fields.as_slice() else {
        return Err(NotationError::MalformedCommand(line.trim().to_owned()));
    };

    let piece = piece_from_code(piece_field)?;
    let cell = algebraic_to_cell(square_field)?;
    Ok((piece, cell))
}

pub fn action_to_move_command(action: &Action) -> Result<String, NotationError> {
    let piece = piece_to_code(action.piece);
    let square = cell_to_algebraic(action.to)?;
    Ok(format!("{piece} {square}"))
}
