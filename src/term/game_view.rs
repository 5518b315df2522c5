//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, Segment};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Phase, GRID_HEIGHT, GRID_WIDTH};

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

// Palette lifted from the original canvas colors.
const FIELD_BG: Rgb = Rgb::new(7, 18, 26);
const HEAD_FG: Rgb = Rgb::new(34, 197, 94);
const BODY_FG: Rgb = Rgb::new(14, 165, 168);
const APPLE_FG: Rgb = Rgb::new(225, 29, 72);

/// A lightweight terminal renderer for the Snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a fresh framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = (GRID_WIDTH as u16) * self.cell_w;
        let field_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Play field background.
        let field = CellStyle::new(Rgb::new(40, 60, 70), FIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field);

        // Border.
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Apple.
        if let Some(apple) = snap.apple {
            let style = CellStyle::new(APPLE_FG, FIELD_BG).bold();
            self.fill_grid_cell(&mut fb, start_x, start_y, apple, '●', style);
        }

        // Snake, head in a distinct color.
        for (cell, segment) in snap.segments() {
            let style = match segment {
                Segment::Head => CellStyle::new(HEAD_FG, FIELD_BG).bold(),
                Segment::Body => CellStyle::new(BODY_FG, FIELD_BG),
            };
            self.fill_grid_cell(&mut fb, start_x, start_y, cell, '█', style);
        }

        // Score panel to the right of the field.
        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        // Phase overlays.
        match snap.phase {
            Phase::Over if snap.won => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "YOU WIN");
                self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y + 2,
                    frame_w,
                    frame_h,
                    "PRESS R TO RESTART",
                );
            }
            Phase::Over => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
                self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y + 2,
                    frame_w,
                    frame_h,
                    "PRESS R TO RESTART",
                );
            }
            Phase::Idle => {
                self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    "PRESS R TO START",
                );
            }
            Phase::Running => {}
        }

        fb
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

    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (cell.x as u16) * self.cell_w;
        let py = start_y + 1 + (cell.y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        // Widest label is "LENGTH" (6 chars); anything narrower than that
        // gets no panel.
        if panel_x >= viewport.width || viewport.width - panel_x < 6 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.snake.len()), value);
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
