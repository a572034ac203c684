//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board inside a border, with a SCORE/LINES/NEXT panel to its right.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Terminal size needed to show the board frame for `snap`.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.columns.saturating_mul(self.cell_w).saturating_add(2),
            snap.rows.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        let well = Well {
            x: origin_x + 1,
            y: origin_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };

        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
        for y in 0..snap.rows as usize {
            for x in 0..snap.columns as usize {
                match PieceKind::from_id(snap.cell(x, y)) {
                    Some(kind) => well.block(fb, x as u16, y as u16, kind),
                    None => well.fill(fb, x as u16, y as u16, '·', empty),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                // Rows above the board are not drawn.
                if x >= 0 && y >= 0 && x < snap.columns as i32 && y < snap.rows as i32 {
                    well.block(fb, x as u16, y as u16, active.kind);
                }
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, origin_y);

        if snap.game_over {
            let mid_y = origin_y.saturating_add(frame_h / 2);
            draw_centered(fb, origin_x, mid_y, frame_w, "GAME OVER");
            draw_centered(fb, origin_x, mid_y.saturating_add(1), frame_w, "r: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_str(panel_x, top, "SCORE", label);
        fb.put_u32(panel_x, top + 1, snap.score, value);

        fb.put_str(panel_x, top + 3, "LINES", label);
        fb.put_u32(panel_x, top + 4, snap.lines, value);

        fb.put_str(panel_x, top + 6, "NEXT", label);
        if let Some(next) = snap.next {
            draw_preview(fb, panel_x, top + 7, &next);
        }
    }
}

/// The board area inside the border.
struct Well {
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Well {
    fn fill(&self, fb: &mut FrameBuffer, col: u16, row: u16, ch: char, style: CellStyle) {
        fb.fill_rect(
            self.x.saturating_add(col.saturating_mul(self.cell_w)),
            self.y.saturating_add(row.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn block(&self, fb: &mut FrameBuffer, col: u16, row: u16, kind: PieceKind) {
        self.fill(fb, col, row, '█', block_style(kind));
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(piece_rgb(kind), WELL_BG).bold()
}

/// Terminal color for each kind's display color.
pub fn piece_rgb(kind: PieceKind) -> Rgb {
    match kind.color() {
        "cyan" => Rgb::new(80, 220, 220),
        "blue" => Rgb::new(80, 120, 220),
        "orange" => Rgb::new(255, 165, 0),
        "yellow" => Rgb::new(240, 220, 80),
        "green" => Rgb::new(100, 220, 120),
        "purple" => Rgb::new(200, 120, 220),
        "red" => Rgb::new(220, 80, 80),
        _ => Rgb::new(220, 220, 220),
    }
}

/// The next piece's matrix, two columns per cell.
fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) {
    let style = CellStyle::new(piece_rgb(piece.kind), PANEL_BG);
    for (col, row) in piece.shape.filled() {
        fb.fill_rect(x + col as u16 * 2, y + row as u16, 2, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.set(x, y, style.cell('┌'));
    fb.set(right, y, style.cell('┐'));
    fb.set(x, bottom, style.cell('└'));
    fb.set(right, bottom, style.cell('┘'));
    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.cell('─'));
        fb.set(x + dx, bottom, style.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.cell('│'));
        fb.set(right, y + dy, style.cell('│'));
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle::new(Rgb::new(255, 80, 80), PANEL_BG).bold();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}
