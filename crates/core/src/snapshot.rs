//! Read-only copies of engine state for renderers and observers

use crate::pieces::{ActivePiece, Shape};
use crate::types::{PieceKind, EMPTY_CELL};

/// Piece as seen from outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl PieceSnapshot {
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Absolute coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(move |(col, row)| (self.x + col, self.y + row))
    }
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Full game state at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub columns: u16,
    pub rows: u16,
    /// Cell identifiers `0..=7`, row-major
    pub board: Vec<u8>,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Identifier at (x, y); empty when out of range
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x >= self.columns as usize || y >= self.rows as usize {
            return EMPTY_CELL;
        }
        self.board[y * self.columns as usize + x]
    }

    /// Display color of the cell at (x, y), `None` when empty
    pub fn color_at(&self, x: usize, y: usize) -> Option<&'static str> {
        PieceKind::from_id(self.cell(x, y)).map(PieceKind::color)
    }

    /// Row `y` as identifiers
    pub fn row(&self, y: usize) -> &[u8] {
        if y >= self.rows as usize {
            return &[];
        }
        let start = y * self.columns as usize;
        &self.board[start..start + self.columns as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 0,
            board: Vec::new(),
            active: None,
            next: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
