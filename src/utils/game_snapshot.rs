//! JSON persistence for a game in progress.
//!
//! A snapshot stores descriptors, never handles: restoring resolves each
//! `{color, kind}` through a fresh [`PieceRegistry`] so identities stay
//! canonical. The document layout:
//!
//! ```json
//! {
//!   "board": [[null, {"color": "white", "kind": "rook"}, null, null], ...],
//!   "turn": "black",
//!   "status": "started",
//!   "winner": null,
//!   "pawnDirections": {"white": "toBlackSide", "black": "toWhiteSide"},
//!   "savedAt": "2024-05-01T12:00:00Z"
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::game_errors::SnapshotError;
use crate::game_state::board::Board;
use crate::game_state::game_rules::BOARD_SIZE;
use crate::game_state::game_state::GameState;
use crate::game_state::piece_registry::PieceRegistry;
use crate::game_state::tic_tac_chec_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnDirections {
    pub white: PawnDirection,
    pub black: PawnDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub turn: Color,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub pawn_directions: PawnDirections,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

pub fn snapshot_game(game_state: &GameState) -> GameSnapshot {
    let mut board = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (cell, id) in game_state.board().occupied() {
        if let Some((row, col)) = cell.indices() {
            board[row][col] = Some(id.descriptor());
        }
    }

    GameSnapshot {
        board,
        turn: game_state.turn(),
        status: game_state.status(),
        winner: game_state.winner(),
        pawn_directions: PawnDirections {
            white: game_state.pawn_direction(Color::White),
            black: game_state.pawn_direction(Color::Black),
        },
        saved_at: None,
    }
}

/// Rebuild a game from a snapshot.
///
/// Fails if a piece appears twice, or if status and winner disagree
/// (`over` needs a winner, `started` must not have one).
pub fn restore_game(snapshot: &GameSnapshot) -> Result<GameState, SnapshotError> {
    match (snapshot.status, snapshot.winner) {
        (GameStatus::Over, None) => {
            let reason = "game is over but has no winner".to_owned();
            return Err(SnapshotError::Inconsistent(reason));
        }
        (GameStatus::Started, Some(winner)) => {
            let reason = format!("game is still running but {winner} is recorded as winner");
            return Err(SnapshotError::Inconsistent(reason));
        }
        _ => {}
    }

    let pieces = PieceRegistry::new();
    let mut board = Board::new();
    for (cell, slot) in Board::cells().zip(snapshot.board.iter().flatten()) {
        let Some(piece) = slot else {
            continue;
        };
        let id = pieces.resolve(*piece);
        if board.contains(id) {
            warn!("rejecting snapshot: {piece} found again on {cell}");
            return Err(SnapshotError::DuplicatePiece(*piece));
        }
        board
            .set(cell, Some(id))
            .map_err(|err| SnapshotError::Inconsistent(err.to_string()))?;
    }

    Ok(GameState {
        board,
        pieces,
        turn: snapshot.turn,
        pawn_directions: [
            snapshot.pawn_directions.white,
            snapshot.pawn_directions.black,
        ],
        status: snapshot.status,
        winner: snapshot.winner,
    })
}

pub fn game_to_json(game_state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&snapshot_game(game_state))?)
}

pub fn game_from_json(json: &str) -> Result<GameState, SnapshotError> {
    let snapshot: GameSnapshot = serde_json::from_str(json)?;
    restore_game(&snapshot)
}

/// Write the game to `path`, stamping the current time.
pub fn write_game_file(path: &Path, game_state: &GameState) -> Result<(), SnapshotError> {
    let snapshot = GameSnapshot {
        saved_at: Some(Utc::now()),
        ..snapshot_game(game_state)
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json).map_err(|source| SnapshotError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("saved game to {}", path.display());
    Ok(())
}

pub fn read_game_file(path: &Path) -> Result<GameState, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|source| SnapshotError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded game from {}", path.display());
    game_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_game() -> GameState {
        let mut game = GameState::new_game();
        let moves = [
            (Piece::new(Color::White, PieceKind::Pawn), Cell::new(1, 1)),
            (Piece::new(Color::Black, PieceKind::Rook), Cell::new(3, 3)),
            (Piece::new(Color::White, PieceKind::Pawn), Cell::new(0, 1)),
        ];
        for (piece, cell) in moves {
            game.make_move(piece, cell)
                .expect("scripted move should be legal");
        }
        game
    }

    #[test]
    fn json_round_trip_is_exact() {
        let game = mid_game();
        let direction = game.pawn_direction(Color::White);
        assert_eq!(direction, PawnDirection::ToWhiteSide);

        let json = game_to_json(&game).expect("serialize");
        let restored = game_from_json(&json).expect("deserialize");
        assert_eq!(restored, game);
    }

    #[test]
    fn json_uses_lowercase_and_camel_case_fields() {
        let value = serde_json::to_value(snapshot_game(&mid_game())).expect("serialize");

        assert_eq!(value["turn"], "black");
        assert_eq!(value["status"], "started");
        assert!(value["winner"].is_null());
        assert_eq!(value["pawnDirections"]["white"], "toWhiteSide");
        assert_eq!(value["pawnDirections"]["black"], "toWhiteSide");
        assert_eq!(value["board"][0][1]["color"], "white");
        assert_eq!(value["board"][0][1]["kind"], "pawn");
        assert!(value["board"][0][0].is_null());
        assert!(value.get("savedAt").is_none());
    }

    #[test]
    fn duplicate_pieces_are_rejected() {
        let mut snapshot = snapshot_game(&GameState::new_game());
        let rook = Piece::new(Color::White, PieceKind::Rook);
        snapshot.board[0][0] = Some(rook);
        snapshot.board[2][3] = Some(rook);

        let result = restore_game(&snapshot);
        let duplicate = matches!(result, Err(SnapshotError::DuplicatePiece(p)) if p == rook);
        assert!(duplicate);
    }

    #[test]
    fn status_and_winner_must_agree() {
        let mut snapshot = snapshot_game(&GameState::new_game());
        snapshot.status = GameStatus::Over;
        let result = restore_game(&snapshot);
        assert!(matches!(result, Err(SnapshotError::Inconsistent(_))));

        snapshot.status = GameStatus::Started;
        snapshot.winner = Some(Color::Black);
        let result = restore_game(&snapshot);
        assert!(matches!(result, Err(SnapshotError::Inconsistent(_))));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = game_from_json("{\"board\": 3}");
        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn file_round_trip_stamps_saved_at() {
        let file = format!("tic_tac_chec_snapshot_test_{}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        let game = mid_game();

        write_game_file(&path, &game).expect("write game file");
        let raw = fs::read_to_string(&path).expect("read raw file");
        let restored = read_game_file(&path).expect("read game file");
        let _ = fs::remove_file(&path);

        assert!(raw.contains("\"savedAt\""));
        assert_eq!(restored, game);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("tic_tac_chec_no_such_game.json");
        let result = read_game_file(&path);
        assert!(matches!(result, Err(SnapshotError::FileRead { .. })));
    }
}
