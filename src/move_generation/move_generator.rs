use std::fmt;

use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::tic_tac_chec_types::{Cell, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Drop from reserve onto an empty cell.
    Placement,
    Movement,
    /// Movement onto an opposing piece, which returns to its owner's reserve.
    Capture,
}

/// One legal `make_move` call for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub piece: Piece,
    pub to: Cell,
    pub kind: ActionKind,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.piece, self.to)
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub action: Action,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> GameResult<Vec<GeneratedMove>>;
}
