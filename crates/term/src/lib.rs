//! Terminal rendering for the game.
//!
//! [`GameView`] paints a [`stackfall_core::GameSnapshot`] into a [`FrameBuffer`]
//! without any I/O, and [`TerminalRenderer`] flushes frame buffers to the real
//! terminal, rewriting only the cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
