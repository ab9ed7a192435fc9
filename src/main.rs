//! Terminal platformer scene viewer (default binary).
//!
//! Draws one static illustration and redraws it only when the terminal is
//! resized. No tick loop: the process blocks on terminal events.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_platformer::term::{SceneView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = SceneView::default();
    let mut viewport: Option<Viewport> = None;

    // Initial mount. The terminal can be unmeasurable here (e.g. detached
    // tty); skip silently and wait for the first resize event.
    if let Ok((w, h)) = crossterm::terminal::size() {
        let vp = Viewport::new(w, h);
        viewport = Some(vp);
        let mut fb = view.render(vp);
        term.draw_swap(&mut fb)?;
    }

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(&key) => {
                return Ok(());
            }
            Event::Resize(w, h) => {
                let next = Viewport::new(w, h);
                if viewport != Some(next) {
                    viewport = Some(next);
                    term.invalidate();
                    let mut fb = view.render(next);
                    term.draw_swap(&mut fb)?;
                }
            }
            _ => {}
        }
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert!(should_quit(&KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(should_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!should_quit(&KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::NONE
        )));
    }
}
