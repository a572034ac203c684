//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Only the four
//! arrow keys drive gameplay; everything else is either a driver command (quit,
//! restart) or ignored.

pub mod map;

pub use stackfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
