//! Two-letter piece codes: color letter then kind letter, case-insensitive.
//! `K` is accepted as a knight alias since there is no king.

use crate::game_errors::NotationError;
use crate::game_state::tic_tac_chec_types::{Color, Piece, PieceKind};

pub fn piece_from_code(code: &str) -> Result<Piece, NotationError> {
    let invalid = || NotationError::InvalidPiece(code.to_owned());

    let mut chars = code.chars().map(|c| c.to_ascii_uppercase());
    let (Some(color_char), Some(kind_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(invalid());
    };

    let color = match color_char {
        'W' => Color::White,
        'B' => Color::Black,
        _ => return Err(invalid()),
    };
    let kind = match kind_char {
        'P' => PieceKind::Pawn,
        'R' => PieceKind::Rook,
        'B' => PieceKind::Bishop,
        'N' | 'K' => PieceKind::Knight,
        _ => return Err(invalid()),
    };

    Ok(Piece::new(color, kind))
}

#[inline]
pub fn piece_to_code(piece: Piece) -> String {
    piece.to_string()
}
