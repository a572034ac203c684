//! Pieces module - shape matrices, clockwise rotation and the active piece
//!
//! Every kind is described by a square matrix (2x2, 3x3 or 4x4) whose filled
//! entries carry the kind's identifier. Rotation produces a new matrix; the base
//! templates are never touched because [`Shape`] is a plain `Copy` value.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest matrix side used by any kind (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Absolute coordinates of the filled cells of a piece
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square rotation matrix of a piece
///
/// `0` is empty, any other value is filled. Only the top-left `size x size`
/// block of `cells` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from an `N x N` matrix, `N <= 4`
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE, "shape matrix larger than {MAX_SHAPE_SIZE}x{MAX_SHAPE_SIZE}");
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (row, values) in rows.iter().enumerate() {
            cells[row][..N].copy_from_slice(values);
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Spawn matrix for a kind
    pub fn base(kind: PieceKind) -> Self {
        let v = kind.id();
        match kind {
            PieceKind::I => Self::from_rows([
                [0, 0, 0, 0],
                [v, v, v, v],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::J => Self::from_rows([[v, 0, 0], [v, v, v], [0, 0, 0]]),
            PieceKind::L => Self::from_rows([[0, 0, v], [v, v, v], [0, 0, 0]]),
            PieceKind::O => Self::from_rows([[v, v], [v, v]]),
            PieceKind::S => Self::from_rows([[0, v, v], [v, v, 0], [0, 0, 0]]),
            PieceKind::T => Self::from_rows([[0, v, 0], [v, v, v], [0, 0, 0]]),
            PieceKind::Z => Self::from_rows([[v, v, 0], [0, v, v], [0, 0, 0]]),
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Value at `(col, row)`; `0` outside the matrix
    pub fn get(&self, col: usize, row: usize) -> u8 {
        if col >= self.size() || row >= self.size() {
            return 0;
        }
        self.cells[row][col]
    }

    /// Matrix rows, each `size()` long
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let n = self.size();
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// `(col, row)` offsets of every filled entry, row-major
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(col, _)| (col as i32, row as i32))
        })
    }

    /// Number of filled entries
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotate 90° clockwise: `new[i][j] = old[n-1-j][i]`
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in cells.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - j][i];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

/// The falling piece: its kind, its own matrix and the anchor of the matrix's
/// top-left corner in grid coordinates
///
/// `y` is negative while part of the matrix is still above the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Fresh piece with a copy of the kind's base matrix at `(spawn_x, 0)`
    pub fn spawn(kind: PieceKind, spawn_x: i32) -> Self {
        Self {
            kind,
            shape: Shape::base(kind),
            x: spawn_x,
            y: 0,
        }
    }

    /// Same piece moved by `(dx, dy)`
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix rotated clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute coordinates of the filled cells
    pub fn cells(&self) -> PieceCells {
        self.shape
            .filled()
            .map(|(col, row)| (self.x + col, self.y + row))
            .collect()
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_shapes_carry_kind_id() {
        for kind in PieceKind::ALL {
            let shape = Shape::base(kind);
            assert_eq!(shape.filled_count(), 4, "{kind:?} should have four minos");
            for row in shape.rows() {
                assert!(row.iter().all(|&v| v == 0 || v == kind.id()));
            }
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        let t = Shape::base(PieceKind::T).rotate_cw();
        let rows: Vec<Vec<u8>> = t.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 6, 0], vec![0, 6, 6], vec![0, 6, 0]]);
    }

    #[test]
    fn rotate_i_clockwise_turns_row_into_column() {
        let i = Shape::base(PieceKind::I).rotate_cw();
        let filled: Vec<_> = i.filled().collect();
        assert_eq!(filled, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn rotation_does_not_touch_base() {
        let piece = ActivePiece::spawn(PieceKind::L, 4);
        let _ = piece.rotated_cw();
        assert_eq!(piece.shape, Shape::base(PieceKind::L));
    }

    #[test]
    fn get_outside_matrix_is_empty() {
        let o = Shape::base(PieceKind::O);
        assert_eq!(o.get(2, 0), 0);
        assert_eq!(o.get(0, 2), 0);
        assert_eq!(o.get(1, 1), 4);
    }

    #[test]
    fn piece_cells_are_absolute() {
        let piece = ActivePiece::spawn(PieceKind::O, 4).shifted(0, 3);
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(4, 3), (5, 3), (4, 4), (5, 4)]);
    }
}
