//! Terminal-oriented board renderer.
//!
//! Produces the text view shown to players: the board with file letters and
//! rank labels, both hands, and whose turn it is (or who won).

use std::fmt::Write as _;

use crate::game_state::game_rules::BOARD_SIZE;
use crate::game_state::game_state::GameState;
use crate::game_state::tic_tac_chec_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// `WR`, `BN`, ...
    #[default]
    Codes,
    /// Chess glyphs, one per cell.
    Unicode,
}

impl RenderStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "codes" => Some(RenderStyle::Codes),
            "unicode" => Some(RenderStyle::Unicode),
            _ => None,
        }
    }
}

/// Render the board, hands, and turn line.
///
/// ```text
///   a  b  c  d
/// 4 WR .  .  .  4
/// ```
pub fn render_game_state(game_state: &GameState, style: RenderStyle) -> String {
    let mut out = String::new();
    let files = file_header(style);

    out.push_str(&files);
    out.push('\n');

    // the first BOARD_SIZE lines are the rows, top to bottom
    let rows = game_state.board().lines();
    for (row, cells) in rows.iter().take(BOARD_SIZE).enumerate() {
        let rank = BOARD_SIZE - row;
        let _ = write!(out, "{rank} ");
        for slot in cells {
            let piece = slot.map(|id| game_state.pieces().piece(id));
            out.push_str(&cell_text(piece, style));
        }
        let _ = writeln!(out, "{rank}");
    }

    out.push_str(&files);
    out.push('\n');
    let _ = writeln!(out, "White hand: {}", hand_string(game_state, Color::White));
    let _ = writeln!(out, "Black hand: {}", hand_string(game_state, Color::Black));

    match game_state.winner() {
        Some(winner) if game_state.is_over() => {
            let _ = writeln!(out, "Game over. Winner: {}", winner.code());
        }
        _ => {
            let _ = writeln!(out, "Next turn: {}", game_state.turn().code());
        }
    }

    out
}

/// Reserve pieces of one color in kind order, or `(none)`.
pub fn hand_string(game_state: &GameState, color: Color) -> String {
    let pieces: Vec<String> = game_state
        .reserve(color)
        .into_iter()
        .map(|piece| piece.to_string())
        .collect();

    if pieces.is_empty() {
        "(none)".to_owned()
    } else {
        pieces.join(" ")
    }
}

fn file_header(style: RenderStyle) -> String {
    let width = cell_width(style);
    let mut header = String::from("  ");
    for col in 0..BOARD_SIZE {
        let file = char::from(b'a' + col as u8);
        let _ = write!(header, "{file:<width$}");
    }
    header.trim_end().to_owned()
}

fn cell_width(style: RenderStyle) -> usize {
    match style {
        RenderStyle::Codes => 3,
        RenderStyle::Unicode => 2,
    }
}

fn cell_text(piece: Option<Piece>, style: RenderStyle) -> String {
    match (piece, style) {
        (None, RenderStyle::Codes) => ".  ".to_owned(),
        (None, RenderStyle::Unicode) => "· ".to_owned(),
        (Some(piece), RenderStyle::Codes) => format!("{piece} "),
        (Some(piece), RenderStyle::Unicode) => format!("{} ", piece_to_unicode(piece)),
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
    }
}
