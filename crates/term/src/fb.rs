//! Framebuffer of styled terminal cells.

use tui_platformer_types::Rgb;

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D grid of styled cells. All accessors are bounds-checked; writes
/// outside the grid are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write text over existing cells, keeping each cell's background so
    /// overlays sit on whatever was painted beneath them.
    pub fn overlay_str(&mut self, x: u16, y: u16, s: &str, fg: Rgb, bold: bool) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            if let Some(cell) = self.get(cx, y) {
                self.set(
                    cx,
                    y,
                    Cell {
                        ch,
                        style: CellStyle {
                            fg,
                            bg: cell.style.bg,
                            bold,
                            dim: false,
                        },
                    },
                );
            }
            cx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'X', CellStyle::default());
        assert!(fb.get(5, 5).is_none());
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn overlay_keeps_background() {
        let mut fb = FrameBuffer::new(4, 1);
        let scene = CellStyle {
            fg: Rgb::new(1, 2, 3),
            bg: Rgb::new(9, 8, 7),
            bold: false,
            dim: false,
        };
        fb.put_char(0, 0, '▀', scene);
        fb.overlay_str(0, 0, "A", Rgb::new(255, 255, 255), true);

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'A');
        assert_eq!(cell.style.fg, Rgb::new(255, 255, 255));
        assert_eq!(cell.style.bg, Rgb::new(9, 8, 7));
        assert!(cell.style.bold);
    }

    #[test]
    fn resize_clears_contents() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'X', CellStyle::default());
        fb.resize(3, 3);
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.width(), 3);
    }
}
