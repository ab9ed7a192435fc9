//! Software 2D drawing surface.
//!
//! An immediate-mode canvas over an owned RGB pixel buffer. Paint sources
//! carry alpha and are blended over the existing pixels; geometry outside
//! the surface is clipped silently. Every operation is a no-op on a
//! zero-sized canvas, so callers never need to guard.
//!
//! Text is not rasterized here: `fill_text` records the request (position,
//! font size, color, literal) and the presentation layer decides how to
//! draw it. This keeps the pixel pass fully deterministic and comparable.

use arrayvec::ArrayVec;
use tui_platformer_types::{Rgb, Rgba};

/// Fixed capacity for recorded text items per frame.
pub const MAX_TEXT_ITEMS: usize = 8;

/// One recorded text draw, in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    /// Left edge of the text baseline.
    pub x: f32,
    /// Baseline y.
    pub y: f32,
    /// Font size in device pixels.
    pub px: f32,
    pub color: Rgba,
    pub text: String,
}

/// Pixel canvas plus the frame's recorded text items.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    texts: ArrayVec<TextItem, MAX_TEXT_ITEMS>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); len],
            texts: ArrayVec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[i] = color.over(self.pixels[i]);
    }

    /// Fill the whole surface with a vertical linear gradient.
    pub fn fill_vertical_gradient(&mut self, top: Rgb, bottom: Rgb) {
        if self.is_empty() {
            return;
        }
        let w = self.width as usize;
        for y in 0..self.height {
            let t = if self.height > 1 {
                y as f32 / (self.height - 1) as f32
            } else {
                0.0
            };
            let color = top.lerp(bottom, t);
            let row = (y as usize) * w;
            self.pixels[row..row + w].fill(color);
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let (x0, x1) = clip_span(x, w, self.width);
        let (y0, y1) = clip_span(y, h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    /// Rectangle with quarter-circle corners. A non-positive radius
    /// degenerates to a plain rectangle.
    pub fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgba) {
        let r = radius.min(w / 2.0).min(h / 2.0);
        if r <= 0.0 {
            self.fill_rect(x, y, w, h, color);
            return;
        }
        let (x0, x1) = clip_span(x, w, self.width);
        let (y0, y1) = clip_span(y, h, self.height);
        for py in y0..y1 {
            let fy = py as f32 + 0.5;
            for px in x0..x1 {
                let fx = px as f32 + 0.5;
                // Distance from the inner (radius-inset) core box; only
                // corner pixels end up with a positive distance.
                let dx = fx - fx.clamp(x + r, x + w - r);
                let dy = fy - fy.clamp(y + r, y + h - r);
                if dx * dx + dy * dy <= r * r {
                    self.blend(px, py, color);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba) {
        if r <= 0.0 || self.is_empty() {
            return;
        }
        let x0 = ((cx - r).floor() as i64).max(0);
        let x1 = ((cx + r).ceil() as i64).min(self.width as i64 - 1);
        let y0 = ((cy - r).floor() as i64).max(0);
        let y1 = ((cy + r).ceil() as i64).min(self.height as i64 - 1);
        for py in y0..=y1 {
            let dy = py as f32 + 0.5 - cy;
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r * r {
                    self.blend(px as u32, py as u32, color);
                }
            }
        }
    }

    /// Fill the union of `(cx, cy, r)` discs, blending each covered pixel
    /// exactly once.
    ///
    /// A semi-transparent color reads as one shape across overlaps, the way
    /// a single multi-arc path fill behaves. Non-positive radii are skipped.
    pub fn fill_circles(&mut self, discs: &[(f32, f32, f32)], color: Rgba) {
        if self.is_empty() {
            return;
        }
        let mut bounds: Option<(f32, f32, f32, f32)> = None;
        for &(cx, cy, r) in discs {
            if r <= 0.0 {
                continue;
            }
            let b = bounds.get_or_insert((cx - r, cy - r, cx + r, cy + r));
            b.0 = b.0.min(cx - r);
            b.1 = b.1.min(cy - r);
            b.2 = b.2.max(cx + r);
            b.3 = b.3.max(cy + r);
        }
        let Some((min_x, min_y, max_x, max_y)) = bounds else {
            return;
        };
        let x0 = (min_x.floor() as i64).max(0);
        let x1 = (max_x.ceil() as i64).min(self.width as i64 - 1);
        let y0 = (min_y.floor() as i64).max(0);
        let y1 = (max_y.ceil() as i64).min(self.height as i64 - 1);
        for py in y0..=y1 {
            let fy = py as f32 + 0.5;
            for px in x0..=x1 {
                let fx = px as f32 + 0.5;
                let covered = discs.iter().any(|&(cx, cy, r)| {
                    let dx = fx - cx;
                    let dy = fy - cy;
                    r > 0.0 && dx * dx + dy * dy <= r * r
                });
                if covered {
                    self.blend(px as u32, py as u32, color);
                }
            }
        }
    }

    pub fn fill_triangle(
        &mut self,
        ax: f32,
        ay: f32,
        bx: f32,
        by: f32,
        cx: f32,
        cy: f32,
        color: Rgba,
    ) {
        if self.is_empty() {
            return;
        }
        let area = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
        if area == 0.0 {
            return;
        }
        let sign = area.signum();
        let x0 = ((ax.min(bx).min(cx)).floor() as i64).max(0);
        let x1 = ((ax.max(bx).max(cx)).ceil() as i64).min(self.width as i64 - 1);
        let y0 = ((ay.min(by).min(cy)).floor() as i64).max(0);
        let y1 = ((ay.max(by).max(cy)).ceil() as i64).min(self.height as i64 - 1);
        let edge = |px: f32, py: f32, x_a: f32, y_a: f32, x_b: f32, y_b: f32| {
            ((x_b - x_a) * (py - y_a) - (y_b - y_a) * (px - x_a)) * sign
        };
        for py in y0..=y1 {
            let fy = py as f32 + 0.5;
            for px in x0..=x1 {
                let fx = px as f32 + 0.5;
                if edge(fx, fy, ax, ay, bx, by) >= 0.0
                    && edge(fx, fy, bx, by, cx, cy) >= 0.0
                    && edge(fx, fy, cx, cy, ax, ay) >= 0.0
                {
                    self.blend(px as u32, py as u32, color);
                }
            }
        }
    }

    /// Record a text draw. Items past the fixed capacity are dropped.
    pub fn fill_text(&mut self, x: f32, y: f32, px: f32, color: Rgba, text: &str) {
        if self.is_empty() || text.is_empty() || self.texts.is_full() {
            return;
        }
        self.texts.push(TextItem {
            x,
            y,
            px,
            color,
            text: text.to_string(),
        });
    }
}

/// Round a span to pixel bounds and clip it to `[0, limit)`.
fn clip_span(start: f32, extent: f32, limit: u32) -> (u32, u32) {
    if extent <= 0.0 || limit == 0 {
        return (0, 0);
    }
    let hi = (start + extent).round().clamp(0.0, limit as f32) as u32;
    let lo = (start.round().max(0.0) as u32).min(hi);
    (lo, hi)
}
