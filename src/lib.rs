//! stackfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmarks share one import path:
//! `stackfall::{core, input, term, types}`.

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;
