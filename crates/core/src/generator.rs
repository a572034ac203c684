//! Piece generation
//!
//! [`RandomPieces`] draws every kind independently and uniformly; there is no
//! bag or history. [`ScriptedPieces`] replays a fixed cycle of kinds, which is
//! what tests and benchmarks use to get a known sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::ActivePiece;
use crate::types::PieceKind;

/// Source of the kinds handed to the engine
pub trait PieceSource {
    /// Kind of the next piece
    fn next_kind(&mut self) -> PieceKind;

    /// Fresh piece of the next kind at `(spawn_x, 0)`
    fn next_piece(&mut self, spawn_x: i32) -> ActivePiece {
        ActivePiece::spawn(self.next_kind(), spawn_x)
    }
}

/// Uniform independent draws
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: StdRng,
}

impl RandomPieces {
    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::COUNT)]
    }
}

/// Endless cycle over a fixed list of kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPieces {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl ScriptedPieces {
    /// `None` if `kinds` is empty
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Option<Self> {
        let kinds = kinds.into();
        if kinds.is_empty() {
            return None;
        }
        Some(Self { kinds, index: 0 })
    }

    /// The same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            index: 0,
        }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}
