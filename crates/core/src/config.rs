//! Engine configuration - playfield dimensions, validated before any state exists

use thiserror::Error;

use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Largest accepted playfield, in cells (`columns * rows`)
pub const MAX_BOARD_CELLS: u32 = 1 << 16;

/// Rejected engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column")]
    ZeroColumns,
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board of {columns}x{rows} exceeds {} cells", MAX_BOARD_CELLS)]
    TooLarge { columns: u16, rows: u16 },
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub columns: u16,
    pub rows: u16,
}

impl EngineConfig {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if u32::from(self.columns) * u32::from(self.rows) > MAX_BOARD_CELLS {
            return Err(ConfigError::TooLarge {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Anchor column for new pieces: one left of center (4 on a 10-wide board)
    pub fn spawn_x(&self) -> i32 {
        (self.columns / 2).saturating_sub(1) as i32
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}
