//! SceneView: paints the platformer canvas into a terminal framebuffer.
//!
//! Pure (no I/O), so the full pipeline from viewport to cells can be
//! unit-tested. Each character cell holds two vertically stacked pixels
//! via the upper-half block: foreground colors the top pixel, background
//! the bottom one.

use tui_platformer_scene::{compute_dimensions, render_scene, Canvas};
use tui_platformer_scene::layout::{
    COIN_GOLD, ENEMY_BODY, GRASS, MOUNTAIN, PLAYER_BODY,
};
use tui_platformer_types::{Rgb, MAX_CONTAINER_WIDTH};

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// Terminal viewport dimensions, in cells.
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

const HALF_BLOCK: char = '▀';

const LEGEND_TITLE: &str = "Key Elements of a 2D Platformer:";

/// Legend swatches and captions, shown beneath the scene when it fits.
const LEGEND: [(Rgb, &str); 6] = [
    (
        PLAYER_BODY.rgb(),
        "Player Character - can run, jump, and interact with the environment",
    ),
    (GRASS.rgb(), "Platforms - for the player to jump on and traverse"),
    (
        COIN_GOLD.rgb(),
        "Collectibles - coins, power-ups, and other items to gather",
    ),
    (ENEMY_BODY.rgb(), "Enemies - obstacles that can damage the player"),
    (
        MOUNTAIN.rgb(),
        "Environment - background elements that create atmosphere",
    ),
    (
        Rgb::new(90, 90, 100),
        "HUD - displays score, lives, and other game information",
    ),
];

/// One blank separator row, a title row, and six item rows.
const LEGEND_ROWS: u16 = 2 + LEGEND.len() as u16;

/// Maps the scene canvas into a terminal framebuffer.
pub struct SceneView {
    /// Cap on the hosting container width, in pixels (columns).
    max_width: u32,
    /// Whether to draw the legend panel when there is room for it.
    legend: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            max_width: MAX_CONTAINER_WIDTH,
            legend: true,
        }
    }
}

impl SceneView {
    pub fn new(max_width: u32, legend: bool) -> Self {
        Self { max_width, legend }
    }

    /// Render one frame for the given viewport.
    ///
    /// An unusably small viewport yields a blank framebuffer; nothing
    /// panics at zero size.
    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let container_width = (viewport.width as u32).min(self.max_width);
        let dims = compute_dimensions(container_width);
        if dims.is_empty() {
            return fb;
        }

        let mut canvas = Canvas::new(dims.width, dims.height);
        render_scene(&mut canvas);

        let scene_rows = ((dims.height + 1) / 2) as u16;
        let show_legend = self.legend && viewport.height >= scene_rows + LEGEND_ROWS;
        let total_rows = scene_rows + if show_legend { LEGEND_ROWS } else { 0 };

        let top = viewport.height.saturating_sub(total_rows) / 2;
        let left = viewport.width.saturating_sub(dims.width as u16) / 2;

        blit_canvas(&mut fb, &canvas, left, top);
        overlay_text(&mut fb, &canvas, left, top);
        if show_legend {
            draw_legend(&mut fb, left, top + scene_rows + 1);
        }
        fb
    }
}

/// Two canvas pixels per cell; an odd bottom row repeats its upper pixel.
fn blit_canvas(fb: &mut FrameBuffer, canvas: &Canvas, left: u16, top: u16) {
    let rows = (canvas.height() + 1) / 2;
    for row in 0..rows {
        for x in 0..canvas.width() {
            let upper = canvas.pixel(x, row * 2).unwrap_or_default();
            let lower = canvas.pixel(x, row * 2 + 1).unwrap_or(upper);
            fb.set(
                left + x as u16,
                top + row as u16,
                Cell {
                    ch: HALF_BLOCK,
                    style: CellStyle {
                        fg: upper,
                        bg: lower,
                        bold: false,
                        dim: false,
                    },
                },
            );
        }
    }
}

/// Draw recorded text items as terminal characters.
///
/// The terminal's glyph grid is the font; the recorded px size only locates
/// the baseline row within the scene.
fn overlay_text(fb: &mut FrameBuffer, canvas: &Canvas, left: u16, top: u16) {
    for item in canvas.texts() {
        let col = left + item.x.round() as u16;
        let row = ((item.y - item.px * 0.5) / 2.0).round().max(0.0) as u16;
        fb.overlay_str(col, top + row, &item.text, item.color.rgb(), true);
    }
}

fn draw_legend(fb: &mut FrameBuffer, left: u16, y0: u16) {
    let base = CellStyle::default();
    fb.put_str(
        left,
        y0,
        LEGEND_TITLE,
        CellStyle {
            fg: Rgb::new(235, 235, 235),
            bold: true,
            ..base
        },
    );

    for (i, (swatch, caption)) in LEGEND.iter().enumerate() {
        let y = y0 + 1 + i as u16;
        let swatch_style = CellStyle { fg: *swatch, ..base };
        fb.put_char(left, y, '█', swatch_style);
        fb.put_char(left + 1, y, '█', swatch_style);
        fb.put_str(
            left + 3,
            y,
            caption,
            CellStyle {
                fg: Rgb::new(200, 200, 200),
                dim: true,
                ..base
            },
        );
    }
}
