//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation of the falling-block game and nothing
//! else: no terminal, no timers, no input devices. A driver calls
//! [`Engine::tick`] on a fixed period, an input layer calls the move/rotate
//! operations, and a renderer reads [`Engine::snapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid, the placement rule and row clearing
//! - [`config`]: board dimensions and their validation
//! - [`engine`]: the game itself (movement, locking, scoring, game over)
//! - [`generator`]: uniform random and scripted piece sources
//! - [`pieces`]: shape matrices and clockwise rotation
//! - [`scoring`]: the `100 * lines²` line-clear table
//! - [`snapshot`]: read-only copies of state for rendering
//!
//! # Rules
//!
//! - Pieces spawn with their matrix anchored at `(columns / 2 - 1, 0)`
//! - Rotation is clockwise only, with no wall kicks
//! - A piece that cannot move down locks immediately on that step
//! - A locked cell in row 0, or a new piece that does not fit, ends the game
//!
//! # Example
//!
//! ```
//! use stackfall_core::{Engine, EngineConfig, ScriptedPieces};
//! use stackfall_core::types::PieceKind;
//!
//! let source = ScriptedPieces::repeat(PieceKind::O);
//! let mut game = Engine::with_source(EngineConfig::default(), source).unwrap();
//!
//! game.move_left();
//! game.rotate_cw();
//! while game.active().y < 18 {
//!     game.tick();
//! }
//! game.tick(); // cannot fall further: locks
//!
//! assert_eq!(game.snapshot().cell(3, 19), PieceKind::O.id());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod generator;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig, MAX_BOARD_CELLS};
pub use engine::{Engine, LockOutcome};
pub use generator::{PieceSource, RandomPieces, ScriptedPieces};
pub use pieces::{ActivePiece, Shape};
pub use scoring::line_clear_score;
pub use snapshot::{GameSnapshot, PieceSnapshot};
