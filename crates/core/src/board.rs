//! Board module - the fixed-size grid and the placement rule
//!
//! Cells live in a flat row-major vector sized once at construction.
//! Coordinates are `(x, y)`: x grows to the right from column 0, y grows down
//! from row 0 (the topmost visible row). Rows above the board (`y < 0`) hold no
//! cells.

use crate::pieces::{ActivePiece, Shape};
use crate::types::{cell_id, Cell};

/// The playfield: `columns x rows` cells, never resized
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: u16,
    rows: u16,
    /// Row-major cells (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    ///
    /// Dimensions are expected to come from a validated
    /// [`EngineConfig`](crate::config::EngineConfig); a zero dimension yields a
    /// board on which nothing can be placed.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.columns as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of row `y`; empty slice when out of range
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.rows as usize {
            return &[];
        }
        let start = y * self.columns as usize;
        &self.cells[start..start + self.columns as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        let row = self.row(y);
        !row.is_empty() && row.iter().all(|cell| cell.is_some())
    }

    /// Any locked cell in row 0
    pub fn top_row_occupied(&self) -> bool {
        self.row(0).iter().any(|cell| cell.is_some())
    }

    /// Whether `shape` anchored at `(x, y)` fits
    ///
    /// Every filled entry must land inside the side walls and above the floor.
    /// Entries above the board (`y < 0`) only answer to the walls; the rest must
    /// land on empty cells.
    pub fn can_place(&self, x: i32, y: i32, shape: &Shape) -> bool {
        shape.filled().all(|(col, row)| {
            let px = x + col;
            let py = y + row;
            if px < 0 || px >= self.columns as i32 || py >= self.rows as i32 {
                return false;
            }
            py < 0 || !self.is_occupied(px, py)
        })
    }

    /// [`Board::can_place`] for a piece at its own anchor
    pub fn fits(&self, piece: &ActivePiece) -> bool {
        self.can_place(piece.x, piece.y, &piece.shape)
    }

    /// Write a piece's kind into every cell it covers on the board
    ///
    /// Cells still above row 0 are dropped. Returns how many cells were written.
    pub fn lock_piece(&mut self, piece: &ActivePiece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if y >= 0 && self.set(x, y, Some(piece.kind)) {
                written += 1;
            }
        }
        written
    }

    /// Remove row `y`, shift every row above it down by one and empty row 0
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.rows as usize {
            return;
        }
        let width = self.columns as usize;
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Clear every full row, scanning top to bottom
    ///
    /// Each full row is removed as soon as it is found and an empty row enters at
    /// the top. Rows below the one removed keep their index, so the scan never
    /// skips a row. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.rows as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell identifiers (`0..=7`), row-major
    pub fn write_ids(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&cell| cell_id(cell)));
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from identifier rows (for testing)
    #[cfg(test)]
    pub fn from_ids(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == width));
        let mut board = Self::new(width as u16, height as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                board.set(x as i32, y as i32, crate::types::PieceKind::from_id(id));
            }
        }
        board
    }

    /// Identifier rows (for testing/display)
    #[cfg(test)]
    pub fn to_ids(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|y| self.row(y).iter().map(|&c| cell_id(c)).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_COLUMNS, crate::types::DEFAULT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::from_ids(&[
            &[1, 0, 0],
            &[0, 2, 0],
            &[3, 3, 3],
            &[0, 0, 4],
        ]);
        board.clear_row(2);
        assert_eq!(
            board.to_ids(),
            vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 4]]
        );
    }

    #[test]
    fn test_adjacent_full_rows_are_both_cleared() {
        let mut board = Board::from_ids(&[
            &[0, 5, 0],
            &[1, 1, 1],
            &[2, 2, 2],
            &[0, 0, 4],
        ]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board.to_ids(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 5, 0], vec![0, 0, 4]]
        );
    }

    #[test]
    fn test_above_board_cells_skip_occupancy() {
        let mut board = Board::new(4, 4);
        board.set(1, 0, Some(PieceKind::T));
        let o = Shape::base(PieceKind::O);
        // Top half above the board, bottom half on row 0 at columns 2-3.
        assert!(board.can_place(2, -1, &o));
        // Bottom half would hit the block at (1, 0).
        assert!(!board.can_place(0, -1, &o));
        // Walls still apply above the board.
        assert!(!board.can_place(3, -1, &o));
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::new(4, 4);
        let piece = ActivePiece::spawn(PieceKind::O, 0).shifted(0, -1);
        assert_eq!(board.lock_piece(&piece), 2);
        assert_eq!(board.to_ids()[0], vec![4, 4, 0, 0]);
        assert!(board.top_row_occupied());
    }
}
