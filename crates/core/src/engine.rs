//! Engine - owns the board, the active and next pieces, the score and the
//! game-over flag
//!
//! Every gameplay call is checked against [`Board::can_place`] before anything
//! changes. Blocked moves and calls after game over return `false` and leave
//! the state untouched.

use crate::config::{ConfigError, EngineConfig};
use crate::generator::{PieceSource, RandomPieces};
use crate::pieces::ActivePiece;
use crate::scoring::line_clear_score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::Board;
use crate::types::GameAction;

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    /// Cells written to the board (cells above row 0 are not counted)
    pub cells_written: u32,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The lock ended the game
    pub game_over: bool,
}

/// A single game
#[derive(Debug, Clone)]
pub struct Engine<S = RandomPieces> {
    config: EngineConfig,
    board: Board,
    active: ActivePiece,
    next: ActivePiece,
    source: S,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    game_over: bool,
    last_lock: Option<LockOutcome>,
}

impl Engine<RandomPieces> {
    /// New game with entropy-seeded pieces
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, RandomPieces::from_entropy())
    }

    /// New game with a reproducible piece sequence
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, RandomPieces::seeded(seed))
    }
}

impl<S: PieceSource> Engine<S> {
    /// New game drawing pieces from `source`
    ///
    /// Fails if the configured dimensions are unusable.
    pub fn with_source(config: EngineConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawn_x = config.spawn_x();
        let active = source.next_piece(spawn_x);
        let next = source.next_piece(spawn_x);
        let mut engine = Self {
            config,
            board: Board::new(config.columns, config.rows),
            active,
            next,
            source,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
            last_lock: None,
        };
        engine.check_block_out();
        Ok(engine)
    }

    /// Start over: empty board, zero score, two fresh pieces
    pub fn init(&mut self) {
        let spawn_x = self.config.spawn_x();
        self.board.clear();
        self.active = self.source.next_piece(spawn_x);
        self.next = self.source.next_piece(spawn_x);
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_over = false;
        self.last_lock = None;
        self.check_block_out();
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> &ActivePiece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the most recent lock since the last `init`
    pub fn last_lock(&self) -> Option<LockOutcome> {
        self.last_lock
    }

    /// Gravity step
    pub fn tick(&mut self) -> bool {
        self.move_down()
    }

    /// Player-requested gravity step
    pub fn soft_drop(&mut self) -> bool {
        self.move_down()
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    /// Rotate the active piece 90° clockwise if the rotated matrix fits in place
    pub fn rotate_cw(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.active.rotated_cw();
        if !self.board.fits(&rotated) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::Restart => {
                self.init();
                true
            }
        }
    }

    /// Move down one row, or lock the piece where it stands
    ///
    /// Returns false only when the game is already over.
    fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let moved = self.active.shifted(0, 1);
        if self.board.fits(&moved) {
            self.active = moved;
        } else {
            self.lock_piece();
        }
        true
    }

    fn move_horizontal(&mut self, dx: i32) -> bool {
        if self.game_over {
            return false;
        }
        let moved = self.active.shifted(dx, 0);
        if !self.board.fits(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Lock the active piece, clear rows, score, check for game over and bring
    /// in the next piece
    ///
    /// `None` when the game is already over.
    pub fn lock_piece(&mut self) -> Option<LockOutcome> {
        if self.game_over {
            return None;
        }

        let cells_written = self.board.lock_piece(&self.active) as u32;
        let lines_cleared = self.board.clear_full_rows() as u32;
        let score_delta = line_clear_score(lines_cleared);

        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        if self.board.top_row_occupied() {
            self.game_over = true;
        }

        // Promote next even on game over so the final frame shows the piece that
        // would have entered.
        let spawn_x = self.config.spawn_x();
        self.active = std::mem::replace(&mut self.next, self.source.next_piece(spawn_x));
        self.check_block_out();

        let outcome = LockOutcome {
            cells_written,
            lines_cleared,
            score_delta,
            game_over: self.game_over,
        };
        self.last_lock = Some(outcome);
        Some(outcome)
    }

    /// A freshly promoted piece that does not fit ends the game
    fn check_block_out(&mut self) {
        if !self.board.fits(&self.active) {
            self.game_over = true;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_ids(&mut out.board);
        out.columns = self.board.columns();
        out.rows = self.board.rows();
        out.active = Some(PieceSnapshot::from(self.active));
        out.next = Some(PieceSnapshot::from(self.next));
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    fn place_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }
}
