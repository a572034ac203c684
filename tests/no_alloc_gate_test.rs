use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use stackfall::core::{Engine, EngineConfig, GameSnapshot};
use stackfall::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use stackfall::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both checks share one test so the global counter is never read concurrently.
#[test]
fn engine_and_diff_hot_paths_do_not_allocate() {
    let mut engine = Engine::with_seed(EngineConfig::default(), 11).unwrap();
    let view = GameView::default();
    let viewport = Viewport::new(60, 30);
    let mut snap = GameSnapshot::default();
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    let mut out = Vec::with_capacity(256 * 1024);

    // Warm-up so the snapshot buffer reaches its final size.
    engine.tick();
    engine.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut prev);

    let engine_allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            engine.apply_action(GameAction::MoveLeft);
            engine.apply_action(GameAction::MoveRight);
            engine.apply_action(GameAction::RotateCw);
        }
        // Enough gravity steps to drive locks, clears and piece promotion.
        for _ in 0..2000 {
            engine.tick();
            engine.soft_drop();
            if engine.game_over() {
                engine.apply_action(GameAction::Restart);
            }
        }
        engine.snapshot_into(&mut snap);
    });
    assert_eq!(engine_allocs, 0);

    let diff_allocs = with_alloc_counting(|| {
        view.render_into(&snap, viewport, &mut next);
        encode_diff_into(&prev, &next, &mut out).unwrap();
    });
    assert_eq!(diff_allocs, 0);
    assert!(!out.is_empty());
}
