//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Renders the board and score panel.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 keeps tiles roughly square under typical glyph aspect ratios
        // and leaves room for four-digit values.
        Self { cell_w: 8, cell_h: 3 }
    }
}

const PANEL_W: u16 = 20;
const PANEL_GAP: u16 = 2;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized only
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let size = snap.size as u16;
        let board_px_w = size * self.cell_w;
        let board_px_h = size * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(fb, start_x, start_y, frame_w, frame_h);
        self.draw_tiles(snap, fb, start_x + 1, start_y + 1, size);
        self.draw_panel(snap, fb, start_x + frame_w + PANEL_GAP, start_y);
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let border = CellStyle {
            fg: Rgb::new(187, 173, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }
        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
    }

    fn draw_tiles(&self, snap: &GameSnapshot, fb: &mut FrameBuffer, x0: u16, y0: u16, size: u16) {
        for row in 0..size {
            for col in 0..size {
                let value = snap.value(col as usize, row as usize);
                let style = tile_style(value);
                // Row 0 is the bottom of the board but the top of the screen
                // is y = 0, so flip vertically.
                let x = x0 + col * self.cell_w;
                let y = y0 + (size - 1 - row) * self.cell_h;
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
                if value != 0 {
                    let text = value.to_string();
                    let pad = (self.cell_w as usize).saturating_sub(text.len()) / 2;
                    fb.put_str(x + pad as u16, y + self.cell_h / 2, &text, style);
                }
            }
        }
    }

    fn draw_panel(&self, snap: &GameSnapshot, fb: &mut FrameBuffer, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(187, 173, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let strong = CellStyle {
            fg: Rgb::new(249, 246, 242),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.put_str(x, y, "2048", strong);
        fb.put_str(x, y + 2, &format!("SCORE {}", snap.score), label);
        fb.put_str(x, y + 3, &format!("BEST  {}", snap.max_score), label);
        fb.put_str(x, y + 5, "arrows/hjkl tilt", label);
        fb.put_str(x, y + 6, "r restart  q quit", label);

        if snap.game_over {
            let banner = CellStyle {
                fg: Rgb::new(249, 246, 242),
                bg: Rgb::new(246, 94, 59),
                bold: true,
            };
            fb.put_str(x, y + 8, " GAME OVER ", banner);
        }
    }
}

/// 2048 tile palette (dark text on light tiles up to 4, light text beyond).
fn tile_style(value: u32) -> CellStyle {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    let (fg, bg) = match value {
        0 => (dark, Rgb::new(205, 193, 180)),
        2 => (dark, Rgb::new(238, 228, 218)),
        4 => (dark, Rgb::new(237, 224, 200)),
        8 => (light, Rgb::new(242, 177, 121)),
        16 => (light, Rgb::new(245, 149, 99)),
        32 => (light, Rgb::new(246, 124, 95)),
        64 => (light, Rgb::new(246, 94, 59)),
        128 => (light, Rgb::new(237, 207, 114)),
        256 => (light, Rgb::new(237, 204, 97)),
        512 => (light, Rgb::new(237, 200, 80)),
        1024 => (light, Rgb::new(237, 197, 63)),
        2048 => (light, Rgb::new(237, 194, 46)),
        _ => (light, Rgb::new(60, 58, 50)),
    };
    CellStyle {
        fg,
        bg,
        bold: value >= 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_score_and_tiles() {
        let state = GameState::from_rows(
            &[
                &[0, 0, 0, 0],
                &[0, 128, 0, 0],
                &[0, 0, 0, 0],
                &[2, 0, 0, 0],
            ],
            356,
            1024,
        );
        let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
        let text = screen_text(&fb);

        assert!(text.contains("SCORE 356"));
        assert!(text.contains("BEST  1024"));
        assert!(text.contains("128"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_render_shows_game_over_banner() {
        let state = GameState::from_rows(
            &[
                &[2, 4, 2, 4],
                &[4, 2, 4, 2],
                &[2, 4, 2, 4],
                &[4, 2, 4, 2],
            ],
            0,
            0,
        );
        assert!(state.game_over());
        let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
        assert!(screen_text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn test_higher_rows_render_above_lower_rows() {
        let state = GameState::from_rows(
            &[
                &[512, 0, 0, 0],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
                &[64, 0, 0, 0],
            ],
            0,
            0,
        );
        let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
        let text = screen_text(&fb);
        let top = text.find("512").expect("512 rendered");
        let bottom = text.find("64").expect("64 rendered");
        assert!(top < bottom, "row 3 must appear above row 0 on screen");
    }

    #[test]
    fn test_tile_palette_distinguishes_values() {
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
        assert_ne!(tile_style(0).bg, tile_style(2).bg);
        // Everything past the winning tile shares the overflow style.
        assert_eq!(tile_style(4096).bg, tile_style(8192).bg);
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let state = GameState::new(4, 1);
        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&state.snapshot(), Viewport::new(40, 20), &mut fb);
        assert_eq!((fb.width(), fb.height()), (40, 20));
        view.render_into(&state.snapshot(), Viewport::new(40, 20), &mut fb);
        assert_eq!((fb.width(), fb.height()), (40, 20));
    }
}
