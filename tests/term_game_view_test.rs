use stackfall::core::{Engine, EngineConfig, ScriptedPieces};
use stackfall::term::{GameView, Viewport};
use stackfall::types::PieceKind;

fn engine_with(kinds: &[PieceKind]) -> Engine<ScriptedPieces> {
    let source = ScriptedPieces::new(kinds.to_vec()).unwrap();
    Engine::with_source(EngineConfig::default(), source).unwrap()
}

fn screen_text(fb: &stackfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = engine_with(&[PieceKind::T]).snapshot();
    let view = GameView::default();

    // 10 cells * 2 chars + border = 22 wide, 20 rows + border = 22 tall.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = engine_with(&[PieceKind::T]).snapshot();
    snap.board[19 * 10] = PieceKind::I.id();
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = engine_with(&[PieceKind::O]).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O at anchor (4, 0) covers board columns 4-5 on rows 0-1.
    for (x, y) in [(9, 1), (10, 1), (11, 1), (12, 1), (9, 2), (12, 2)] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "({x}, {y})");
    }
    assert_eq!(fb.get(7, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = engine_with(&[PieceKind::T, PieceKind::I]).snapshot();
    snap.score = 1234;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
    // Next I preview: one row of four two-char blocks.
    assert!(all.contains("████████"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = engine_with(&[PieceKind::T]).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over() {
    let mut engine = engine_with(&[PieceKind::O]);
    while !engine.game_over() {
        engine.tick();
    }
    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(40, 24));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = engine_with(&[PieceKind::L]).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
