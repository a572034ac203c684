//! Shared types - piece kinds, actions and playfield constants
//!
//! Everything here is plain data with no behavior beyond conversions, so the
//! engine, the renderer and the input layer can all agree on it.
//!
//! # Cell encoding
//!
//! A grid cell is either empty or holds the kind of the piece that locked into it.
//! At crate boundaries (snapshots, rendering) a cell is a small integer in the
//! closed range `[0, 7]`:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | empty |
//! | 1 | I |
//! | 2 | J |
//! | 3 | L |
//! | 4 | O |
//! | 5 | S |
//! | 6 | T |
//! | 7 | Z |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{GameAction, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::I.id(), 1);
//! assert_eq!(PieceKind::from_id(7), Some(PieceKind::Z));
//! assert_eq!(PieceKind::from_id(0), None);
//!
//! assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
//!
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default playfield width in cells
pub const DEFAULT_COLUMNS: u16 = 10;

/// Default playfield height in cells
pub const DEFAULT_ROWS: u16 = 20;

/// Default gravity period of the driver loop in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// Cell value used for an empty cell
pub const EMPTY_CELL: u8 = 0;

/// Points for a single cleared line; clears score `LINE_CLEAR_BASE * lines²`
pub const LINE_CLEAR_BASE: u32 = 100;

/// The seven piece kinds, in identifier order
///
/// Colors are display-only:
/// - **I**: cyan, 4-long bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow, 2x2 square
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, ordered by identifier
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Number of distinct kinds (the largest valid cell identifier)
    pub const COUNT: usize = 7;

    /// Grid identifier in `1..=7`
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]; `0` and anything above 7 map to `None`
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Display color name
    pub fn color(self) -> &'static str {
        match self {
            PieceKind::I => "cyan",
            PieceKind::J => "blue",
            PieceKind::L => "orange",
            PieceKind::O => "yellow",
            PieceKind::S => "green",
            PieceKind::T => "purple",
            PieceKind::Z => "red",
        }
    }

    /// Parse piece kind from a one-letter name (case-insensitive)
    ///
    /// ```
    /// use stackfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Player commands accepted by the engine
///
/// Blocked moves and rotations are silently ignored; none of these can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameAction {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Step the active piece one row down, locking it if it cannot move
    SoftDrop,
    /// Rotate the active piece 90° clockwise
    RotateCw,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse an action name (case-insensitive camelCase)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Restart => "restart",
        }
    }
}

/// A grid cell: `None` when empty, otherwise the kind that locked there
pub type Cell = Option<PieceKind>;

/// Encode a cell as its `[0, 7]` identifier
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(EMPTY_CELL, PieceKind::id)
}
