//! Errors used throughout the crate.
//!
//! `GameError` is the single error type returned by the engine. Every variant
//! is a recoverable validation failure: invalid player input is expected and
//! frequent, so callers print the message and let the same player try again.
//! Its `Display` text is player-facing and is relayed verbatim by the text
//! session.
//!
//! The remaining enums belong to the collaborators layered on top of the
//! engine (notation parsing, persistence, the file-backed CLI).

use std::io;
use std::path::PathBuf;

use crate::game_state::tic_tac_chec_types::{Cell, Color, Piece};

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Target coordinates fall outside the 4x4 grid.
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Cell),

    /// A placement targeted a cell that already holds a piece.
    #[error("cell {cell} is already taken by {occupant}")]
    Occupied { cell: Cell, occupant: Piece },

    /// A movement target is not among the piece's legal destinations.
    #[error("{piece} cannot move to {to}: illegal move")]
    IllegalMove { piece: Piece, to: Cell },

    /// Move generation was requested for a piece still in reserve.
    #[error("{0} is not on the board")]
    NotOnBoard(Piece),

    /// Payload is the color whose turn it actually is.
    #[error("it is not your turn, {0} is to move")]
    NotYourTurn(Color),

    #[error("game is over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid piece: {0}")]
    InvalidPiece(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("type piece and square separated by space, got: {0:?}")]
    MalformedCommand(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read game file {path}: {source}")]
    FileRead { path: PathBuf, source: io::Error },

    #[error("failed to write game file {path}: {source}")]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} appears on the board more than once")]
    DuplicatePiece(Piece),

    #[error("inconsistent game state: {0}")]
    Inconsistent(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
