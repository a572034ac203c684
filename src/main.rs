//! Terminal runner (default binary).
//!
//! Owns the fixed-period gravity loop: the engine is ticked every `--tick-ms`
//! milliseconds, keys are polled in between, and the screen is redrawn after
//! every tick or handled key.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use stackfall::core::{Engine, EngineConfig, RandomPieces};
use stackfall::input::{handle_key_event, should_quit, should_restart};
use stackfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use stackfall::types::{GameAction, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_TICK_MS};

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Gravity period in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Seed for a reproducible piece sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = EngineConfig::new(args.columns, args.rows);
    let source = match args.seed {
        Some(seed) => RandomPieces::seeded(seed),
        None => RandomPieces::from_entropy(),
    };
    let engine = Engine::with_source(config, source).context("invalid board configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine, Duration::from_millis(args.tick_ms));

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = result?;
    println!("final score: {score}");
    Ok(())
}

/// Play until the user quits; returns the score on screen at that moment.
fn run(term: &mut TerminalRenderer, mut engine: Engine, tick: Duration) -> Result<u32> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&engine.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(engine.score());
                    }
                    if should_restart(key) {
                        engine.apply_action(GameAction::Restart);
                        last_tick = Instant::now();
                        dirty = true;
                    } else if let Some(action) = handle_key_event(key) {
                        dirty |= engine.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            dirty |= engine.tick();
        }
    }
}
