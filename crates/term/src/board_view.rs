//! BoardView: lays a `core::Grid` out as a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Frame layout for a grid of side `n`:
//!
//! ```text
//! row 0            (blank)
//! row 1                    2048
//! row 2            ┏━━━━━┳━━━━━┓
//! row 3 + 2r       ┃   2 ┃     ┃
//! row 4 + 2r       ┣━━━━━╋━━━━━┫   (┗━━━━━┻━━━━━┛ after the last row)
//! row 3 + 2n       (blank)
//! row 4 + 2n       Score: 0
//! ```

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CELL_WIDTH;

const TITLE: &str = "2048";
const TITLE_INDENT: u16 = 8;
const TITLE_ROW: u16 = 1;
const GRID_TOP_ROW: u16 = 2;
const SCORE_LABEL: &str = "Score: ";
/// Wide enough for the title and a long score on a 2×2 grid.
const MIN_FRAME_WIDTH: u16 = 24;

/// Horizontal run inside one cell (the unit minus its separator).
const CELL_RULE: &str = "━━━━━";

const ACCENT: Rgb = Rgb::new(240, 200, 60);

/// Precomputed layout for one grid size.
#[derive(Debug, Clone)]
pub struct BoardView {
    size: usize,
    top: String,
    mid: String,
    bottom: String,
}

impl BoardView {
    /// Build the border strings for a `size × size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            top: border(size, '┏', '┳', '┓'),
            mid: border(size, '┣', '╋', '┫'),
            bottom: border(size, '┗', '┻', '┛'),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn top_border(&self) -> &str {
        &self.top
    }

    pub fn mid_border(&self) -> &str {
        &self.mid
    }

    pub fn bottom_border(&self) -> &str {
        &self.bottom
    }

    /// Frame width in terminal columns.
    pub fn width(&self) -> u16 {
        ((CELL_WIDTH * self.size + 1) as u16).max(MIN_FRAME_WIDTH)
    }

    /// Frame height in terminal rows.
    pub fn height(&self) -> u16 {
        (2 * self.size + 5) as u16
    }

    /// Row holding the score line.
    pub fn score_row(&self) -> u16 {
        self.height() - 1
    }

    /// Render the grid into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to
    /// [`width`](Self::width) × [`height`](Self::height).
    pub fn render_into(&self, grid: &Grid, fb: &mut FrameBuffer) {
        debug_assert_eq!(grid.size(), self.size);
        fb.resize(self.width(), self.height());
        fb.clear(CellStyle::default().into_cell(' '));

        let border = CellStyle::default();
        let accent = CellStyle::fg(ACCENT).bold();

        fb.put_str(TITLE_INDENT, TITLE_ROW, TITLE, accent);
        fb.put_str(0, GRID_TOP_ROW, &self.top, border);

        let right_edge = (CELL_WIDTH * self.size) as u16;
        for row in 0..self.size {
            let y = GRID_TOP_ROW + 1 + 2 * row as u16;
            for col in 0..self.size {
                let x = (CELL_WIDTH * col) as u16;
                fb.put_char(x, y, '┃', border);

                let value = grid.get(row, col).unwrap_or(0);
                if value > 0 {
                    let label = tile_label(value);
                    for (dx, ch) in label.chars().take(CELL_WIDTH - 1).enumerate() {
                        fb.put_char(x + 1 + dx as u16, y, ch, tile_style(value));
                    }
                }
            }
            fb.put_char(right_edge, y, '┃', border);

            let rule = if row + 1 == self.size {
                &self.bottom
            } else {
                &self.mid
            };
            fb.put_str(0, y + 1, rule, border);
        }

        let score_y = self.score_row();
        fb.put_str(0, score_y, SCORE_LABEL, border);
        let mut score = ArrayString::<24>::new();
        let _ = write!(score, "{}", grid.score());
        fb.put_str(SCORE_LABEL.len() as u16, score_y, &score, accent);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width(), self.height());
        self.render_into(grid, &mut fb);
        fb
    }
}

fn border(size: usize, left: char, join: char, right: char) -> String {
    let mut s = String::with_capacity(size * CELL_WIDTH * 3 + 3);
    s.push(left);
    s.push_str(CELL_RULE);
    for _ in 1..size {
        s.push(join);
        s.push_str(CELL_RULE);
    }
    s.push(right);
    s
}

/// Tile text, right-justified in a five-column field.
///
/// Up to four digits keep a trailing space; five digits fill the field;
/// larger tiles are shown in units of 1024 (`k`) and then 1024² (`M`), so
/// even the largest `u32` tile fits.
pub fn tile_label(value: u32) -> ArrayString<8> {
    let mut s = ArrayString::new();
    let _ = if value >= 10_000 * 1024 {
        write!(s, "{:>4}M", value >> 20)
    } else if value >= 100_000 {
        write!(s, "{:>4}k", value >> 10)
    } else if value >= 10_000 {
        write!(s, "{:>5}", value)
    } else {
        write!(s, "{:>4} ", value)
    };
    s
}

fn tile_style(value: u32) -> CellStyle {
    let fg = match value {
        2 => Rgb::new(220, 220, 220),
        4 => Rgb::new(230, 220, 170),
        8 => Rgb::new(245, 175, 110),
        16 => Rgb::new(245, 145, 95),
        32 => Rgb::new(245, 120, 95),
        64 => Rgb::new(245, 90, 60),
        128..=512 => Rgb::new(240, 210, 110),
        1024 | 2048 => ACCENT,
        _ => Rgb::new(120, 200, 255),
    };
    CellStyle {
        fg: Some(fg),
        bg: None,
        bold: value >= 128,
    }
}
