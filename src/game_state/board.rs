//! 4x4 grid of optional piece handles.
//!
//! The board only does bookkeeping. Legality (turn, vacancy, capture rules)
//! is checked by move generation and the game state before anything here is
//! called.

use crate::game_errors::{GameError, GameResult};
use crate::game_state::game_rules::{BOARD_SIZE, LINE_COUNT};
use crate::game_state::piece_registry::PieceId;
use crate::game_state::tic_tac_chec_types::Cell;

/// Four cells checked together for the win condition.
pub type Line = [Option<PieceId>; BOARD_SIZE];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn at(&self, cell: Cell) -> GameResult<Option<PieceId>> {
        let (row, col) = cell.indices().ok_or(GameError::OutOfBounds(cell))?;
        Ok(self.cells[row][col])
    }

    /// Linear scan; `None` means the piece is in reserve.
    pub fn find(&self, piece: PieceId) -> Option<Cell> {
        self.occupied()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(cell, _)| cell)
    }

    #[inline]
    pub fn contains(&self, piece: PieceId) -> bool {
        self.find(piece).is_some()
    }

    /// Relocate an on-board piece. Whatever stood on `to` is overwritten,
    /// which is how a capture sends a piece back to reserve.
    pub fn move_piece(&mut self, piece: PieceId, to: Cell) -> GameResult<()> {
        let (to_row, to_col) = to.indices().ok_or(GameError::OutOfBounds(to))?;
        let from = self
            .find(piece)
            .ok_or(GameError::NotOnBoard(piece.descriptor()))?;
        let (from_row, from_col) = from.indices().ok_or(GameError::OutOfBounds(from))?;

        self.cells[from_row][from_col] = None;
        self.cells[to_row][to_col] = Some(piece);
        Ok(())
    }

    /// Write a slot directly. Used by placement and by state restoration; the
    /// caller keeps the one-cell-per-piece invariant.
    pub(crate) fn set(&mut self, cell: Cell, piece: Option<PieceId>) -> GameResult<()> {
        let (row, col) = cell.indices().ok_or(GameError::OutOfBounds(cell))?;
        self.cells[row][col] = piece;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    /// All cells in row-major order.
    pub fn cells() -> impl Iterator<Item = Cell> {
        let size = BOARD_SIZE as i8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        Self::cells().filter_map(move |cell| {
            let (row, col) = cell.indices()?;
            self.cells[row][col].map(|piece| (cell, piece))
        })
    }

    /// Rows, then columns, then the main diagonal and the anti-diagonal.
    pub fn lines(&self) -> [Line; LINE_COUNT] {
        let mut lines = [[None; BOARD_SIZE]; LINE_COUNT];

        for i in 0..BOARD_SIZE {
            lines[i] = self.cells[i];
            for row in 0..BOARD_SIZE {
                lines[BOARD_SIZE + i][row] = self.cells[row][i];
            }
            lines[2 * BOARD_SIZE][i] = self.cells[i][i];
            lines[2 * BOARD_SIZE + 1][i] = self.cells[i][BOARD_SIZE - i - 1];
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::piece_registry::PieceRegistry;
    use crate::game_state::tic_tac_chec_types::{Color, PieceKind};

    #[test]
    fn at_rejects_out_of_bounds_cells() {
        let board = Board::new();
        assert_eq!(board.at(Cell::new(0, 0)), Ok(None));
        assert_eq!(
            board.at(Cell::new(4, 0)),
            Err(GameError::OutOfBounds(Cell::new(4, 0)))
        );
        assert_eq!(
            board.at(Cell::new(0, -1)),
            Err(GameError::OutOfBounds(Cell::new(0, -1)))
        );
    }

    #[test]
    fn find_reports_reserve_pieces_as_missing() {
        let registry = PieceRegistry::new();
        let rook = registry.get(Color::White, PieceKind::Rook);
        let mut board = Board::new();
        assert_eq!(board.find(rook), None);

        board
            .set(Cell::new(2, 1), Some(rook))
            .expect("cell should be valid");
        assert_eq!(board.find(rook), Some(Cell::new(2, 1)));
        assert_eq!(board.find(rook), board.find(rook));
    }

    #[test]
    fn move_piece_clears_the_old_cell() {
        let registry = PieceRegistry::new();
        let rook = registry.get(Color::White, PieceKind::Rook);
        let pawn = registry.get(Color::Black, PieceKind::Pawn);
        let mut board = Board::new();
        board
            .set(Cell::new(0, 0), Some(rook))
            .expect("cell should be valid");
        board
            .set(Cell::new(0, 3), Some(pawn))
            .expect("cell should be valid");

        board
            .move_piece(rook, Cell::new(0, 3))
            .expect("move should succeed");

        assert_eq!(board.at(Cell::new(0, 0)), Ok(None));
        assert_eq!(board.at(Cell::new(0, 3)), Ok(Some(rook)));
        assert_eq!(board.find(pawn), None);
    }

    #[test]
    fn move_piece_requires_the_piece_on_board() {
        let registry = PieceRegistry::new();
        let knight = registry.get(Color::Black, PieceKind::Knight);
        let mut board = Board::new();

        assert_eq!(
            board.move_piece(knight, Cell::new(1, 1)),
            Err(GameError::NotOnBoard(knight.descriptor()))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn cells_cover_the_board_in_row_major_order() {
        let cells: Vec<Cell> = Board::cells().collect();
        assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[BOARD_SIZE], Cell::new(1, 0));
        assert_eq!(cells[15], Cell::new(3, 3));
        assert!(cells.iter().all(|cell| cell.is_valid()));
    }

    #[test]
    fn lines_are_rows_columns_then_diagonals() {
        let registry = PieceRegistry::new();
        let bishop = registry.get(Color::White, PieceKind::Bishop);
        let mut board = Board::new();
        board
            .set(Cell::new(1, 2), Some(bishop))
            .expect("cell should be valid");

        let lines = board.lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], [None, None, Some(bishop), None]);
        assert_eq!(lines[BOARD_SIZE + 2], [None, Some(bishop), None, None]);
        assert_eq!(lines[2 * BOARD_SIZE], [None; BOARD_SIZE]);
        assert_eq!(lines[2 * BOARD_SIZE + 1], [None, Some(bishop), None, None]);
    }
}
