//! Terminal compositing checks: canvas pixels to half-block cells, HUD text
//! overlay, legend placement, and centering.

use tui_platformer::scene::layout::{PLAYER_BODY, SKY_TOP};
use tui_platformer::term::{FrameBuffer, SceneView, Viewport};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).unwrap().ch)
        .collect()
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y) + "\n").collect()
}

#[test]
fn scene_is_composited_as_half_blocks() {
    let view = SceneView::default();
    // 160 columns -> 160x90 canvas -> 45 cell rows; legend (8 rows) does
    // not fit in 50, so the scene is centered alone: rows 2..=46.
    let fb = view.render(Viewport::new(160, 50));

    let cell = fb.get(0, 2).unwrap();
    assert_eq!(cell.ch, '▀');
    // The first pixel row is the exact top gradient stop.
    assert_eq!(cell.style.fg, SKY_TOP);

    // Above and below the scene block stay blank.
    assert_eq!(fb.get(0, 1).unwrap().ch, ' ');
    assert_eq!(fb.get(0, 47).unwrap().ch, ' ');
}

#[test]
fn hud_text_is_overlaid_as_terminal_characters() {
    let view = SceneView::default();
    let fb = view.render(Viewport::new(160, 50));

    // Score text: reference (20, 30) scaled by 0.2 -> column 4, and the
    // baseline lands on cell row 2 inside the scene block starting at row 2.
    assert_eq!(fb.get(4, 4).unwrap().ch, 'S');
    let score: String = (4..15).map(|x| fb.get(x, 4).unwrap().ch).collect();
    assert_eq!(score, "SCORE: 1250");

    // Lives text is right-anchored: x = 160 - 100 * 0.2 = 140.
    assert_eq!(fb.get(140, 4).unwrap().ch, 'L');
    // Coin counter label at x = 160 - 125 * 0.2 = 135.
    assert_eq!(fb.get(135, 4).unwrap().ch, '×');

    // Overlay keeps the scene pixel behind the glyph as the background.
    assert_ne!(fb.get(4, 4).unwrap().style.bg, fb.get(4, 4).unwrap().style.fg);
}

#[test]
fn legend_appears_when_there_is_room() {
    let view = SceneView::default();
    // 45 scene rows + 8 legend rows = 53 <= 60.
    let fb = view.render(Viewport::new(160, 60));

    // Scene centered over the combined block: top = (60 - 53) / 2 = 3.
    assert_eq!(fb.get(0, 3).unwrap().ch, '▀');

    // Legend title one blank row below the scene (row 3 + 45 + 1).
    assert_eq!(row_text(&fb, 49)[..32].to_string(), "Key Elements of a 2D Platformer:");

    // First legend item: player swatch then caption.
    let swatch = fb.get(0, 50).unwrap();
    assert_eq!(swatch.ch, '█');
    assert_eq!(swatch.style.fg, PLAYER_BODY.rgb());
    assert!(row_text(&fb, 50).contains("Player Character"));

    // Legend can be disabled.
    let bare = SceneView::new(896, false).render(Viewport::new(160, 60));
    assert!(!all_text(&bare).contains("Key Elements"));
}

#[test]
fn wide_viewports_cap_the_container_and_center_the_scene() {
    let view = SceneView::new(400, false);
    // Container capped at 400 -> 400x225 canvas -> 113 rows, centered in
    // a 500x200 viewport: top = (200 - 113) / 2 = 43, left = 50.
    let fb = view.render(Viewport::new(500, 200));

    assert_eq!(fb.get(50, 43).unwrap().ch, '▀');
    assert_eq!(fb.get(50, 43).unwrap().style.fg, SKY_TOP);
    assert_eq!(fb.get(49, 43).unwrap().ch, ' ');
    assert_eq!(fb.get(450, 43).unwrap().ch, ' ');
}

#[test]
fn rendering_the_same_viewport_twice_is_identical() {
    let view = SceneView::default();
    let a = view.render(Viewport::new(200, 56));
    let b = view.render(Viewport::new(200, 56));
    assert_eq!(a, b);
}

#[test]
fn degenerate_viewports_yield_blank_frames() {
    let view = SceneView::default();

    let fb = view.render(Viewport::new(0, 0));
    assert_eq!((fb.width(), fb.height()), (0, 0));

    // Width 1 floors to a zero-height canvas: blank, no panic.
    let fb = view.render(Viewport::new(1, 5));
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
}
