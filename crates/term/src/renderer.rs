//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! The terminal is acquired with `enter` (raw mode, alternate screen) and
//! must be released with `exit`; callers keep the release on every path.
//! Frames are diffed against the previous one and only changed spans are
//! rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use tui_platformer_types::Rgb;

use crate::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer and keep it for diffing the next frame.
    ///
    /// The previous frame's buffer is swapped back into `fb` so callers can
    /// reuse the allocation without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(0, 0));

        if prev.width() != fb.width() || prev.height() != fb.height() {
            self.repaint_all(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.repaint_dirty(fb, &prev)?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn repaint_all(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.finish_frame()
    }

    fn repaint_dirty(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut style: Option<CellStyle> = None;

        for y in 0..next.height() {
            for_each_changed_run(prev, next, y, |start, len| {
                self.stdout.queue(cursor::MoveTo(start, y))?;
                for x in start..start + len {
                    let cell = next.get(x, y).unwrap_or_default();
                    if style != Some(cell.style) {
                        self.apply_style(cell.style)?;
                        style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                }
                Ok(())
            })?;
        }

        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        // Attributes first: Attribute::Reset also clears colors.
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        self.stdout.queue(SetColors(Colors::new(
            rgb_to_color(style.fg),
            rgb_to_color(style.bg),
        )))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Visit each contiguous `(start, len)` run in row `y` where `next` differs
/// from `prev`. Runs stream through the visitor; nothing is allocated.
/// Both buffers must have equal dimensions.
fn for_each_changed_run<F>(prev: &FrameBuffer, next: &FrameBuffer, y: u16, mut visit: F) -> Result<()>
where
    F: FnMut(u16, u16) -> Result<()>,
{
    let w = next.width();
    let mut x = 0;
    while x < w {
        if next.get(x, y) == prev.get(x, y) {
            x += 1;
            continue;
        }
        let start = x;
        while x < w && next.get(x, y) != prev.get(x, y) {
            x += 1;
        }
        visit(start, x - start)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn collect_runs(prev: &FrameBuffer, next: &FrameBuffer, y: u16) -> Vec<(u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(prev, next, y, |start, len| {
            runs.push((start, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        for x in [1, 2, 3, 5] {
            b.set(
                x,
                0,
                Cell {
                    ch: 'X',
                    style: CellStyle::default(),
                },
            );
        }
        assert_eq!(collect_runs(&a, &b, 0), vec![(1, 3), (5, 1)]);
    }

    #[test]
    fn identical_rows_visit_no_runs() {
        let a = FrameBuffer::new(4, 2);
        let b = a.clone();
        assert!(collect_runs(&a, &b, 0).is_empty());
        assert!(collect_runs(&a, &b, 1).is_empty());
    }

    #[test]
    fn visitor_errors_stop_the_scan() {
        let a = FrameBuffer::new(4, 1);
        let mut b = a.clone();
        b.set(
            0,
            0,
            Cell {
                ch: 'X',
                style: CellStyle::default(),
            },
        );
        let result = for_each_changed_run(&a, &b, 0, |_, _| anyhow::bail!("stop"));
        assert!(result.is_err());
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
