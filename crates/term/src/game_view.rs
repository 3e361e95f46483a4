//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb, TermCell};
use crate::types::GRID_SIZE;

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps room for up to 5-digit values and compensates for the
        // terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it only reallocates when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TermCell::default());

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2 + 1;

        self.draw_header(fb, snap, start_x, start_y, frame_w);

        let border = CellStyle::new(Rgb::new(187, 173, 160), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..GRID_SIZE as u16 {
            for x in 0..GRID_SIZE as u16 {
                let value = snap.cells[y as usize][x as usize];
                self.draw_grid_cell(fb, start_x, start_y, x, y, value);
            }
        }

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }

        self.draw_help(fb, start_x, start_y, frame_h);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle::default().bold();
        let y = start_y.saturating_sub(1);
        fb.put_str(start_x, y, "2048", label);

        let score = format!("SCORE {}", snap.score);
        let score_x = start_x + frame_w.saturating_sub(score.chars().count() as u16);
        fb.put_str(score_x, y, &score, CellStyle::default());
    }

    fn draw_help(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_h: u16) {
        let dim = CellStyle::new(Rgb::new(130, 130, 130), Rgb::new(0, 0, 0));
        let y = start_y.saturating_add(frame_h);
        fb.put_str(start_x, y, "arrows/wasd move  n new  q quit", dim);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: u32,
    ) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;

        if value == 0 {
            let empty = CellStyle::new(Rgb::new(110, 100, 90), Rgb::new(35, 33, 31));
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', empty);
            fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', empty);
            return;
        }

        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        // Value centered in the cell.
        let text = value.to_string();
        let text_w = text.chars().count() as u16;
        let tx = px + self.cell_w.saturating_sub(text_w) / 2;
        let ty = py + self.cell_h / 2;
        fb.put_str(tx, ty, &text, style.bold());
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Classic 2048 palette, keyed by tile value.
fn tile_style(value: u32) -> CellStyle {
    let dark_text = Rgb::new(119, 110, 101);
    let light_text = Rgb::new(249, 246, 242);

    let (fg, bg) = match value {
        2 => (dark_text, Rgb::new(238, 228, 218)),
        4 => (dark_text, Rgb::new(237, 224, 200)),
        8 => (light_text, Rgb::new(242, 177, 121)),
        16 => (light_text, Rgb::new(245, 149, 99)),
        32 => (light_text, Rgb::new(246, 124, 95)),
        64 => (light_text, Rgb::new(246, 94, 59)),
        128 => (light_text, Rgb::new(237, 207, 114)),
        256 => (light_text, Rgb::new(237, 204, 97)),
        512 => (light_text, Rgb::new(237, 200, 80)),
        1024 => (light_text, Rgb::new(237, 197, 63)),
        2048 => (light_text, Rgb::new(237, 194, 46)),
        _ => (light_text, Rgb::new(60, 58, 50)),
    };
    CellStyle::new(fg, bg)
}
