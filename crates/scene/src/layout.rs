//! Scene layout constants.
//!
//! Every position and extent lives in the 800×450 reference frame and is
//! scaled at draw time. These are the literal values of the illustration;
//! nothing here is runtime state.

use tui_platformer_types::{Rgb, Rgba};

/// Axis-aligned box in reference coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Point in reference coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// --- palette ---

pub const SKY_TOP: Rgb = Rgb::new(135, 206, 235); // #87CEEB
pub const SKY_BOTTOM: Rgb = Rgb::new(224, 247, 255); // #E0F7FF
pub const CLOUD: Rgba = Rgba::new(255, 255, 255, 204);
pub const MOUNTAIN: Rgba = Rgba::opaque(156, 180, 204); // #9CB4CC
pub const EARTH: Rgba = Rgba::opaque(139, 69, 19); // #8B4513
pub const GRASS: Rgba = Rgba::opaque(34, 139, 34); // #228B22
pub const COIN_GOLD: Rgba = Rgba::opaque(255, 215, 0); // #FFD700
pub const COIN_HIGHLIGHT: Rgba = Rgba::opaque(255, 248, 220); // #FFF8DC
pub const ENEMY_BODY: Rgba = Rgba::opaque(255, 69, 0); // #FF4500
pub const PLAYER_BODY: Rgba = Rgba::opaque(65, 105, 225); // #4169E1
pub const PLAYER_SKIN: Rgba = Rgba::opaque(255, 160, 122); // #FFA07A
pub const EYE_WHITE: Rgba = Rgba::opaque(255, 255, 255);
pub const EYE_PUPIL: Rgba = Rgba::opaque(0, 0, 0);
pub const HUD_PANEL: Rgba = Rgba::new(0, 0, 0, 128);
pub const HUD_TEXT: Rgba = Rgba::opaque(255, 255, 255);

// --- sky decorations ---

/// Cloud anchors: (x, y) is the left puff center, (w, h) the spread and
/// base puff radius.
pub const CLOUDS: [Rect; 3] = [
    Rect::new(100.0, 80.0, 60.0, 30.0),
    Rect::new(300.0, 60.0, 80.0, 40.0),
    Rect::new(600.0, 100.0, 70.0, 35.0),
];

/// Mountain anchors: (x, y) is the base midpoint, the apex sits at
/// `y - h` and the base spans `x ± w/2`.
pub const MOUNTAINS: [Rect; 3] = [
    Rect::new(150.0, 200.0, 200.0, 150.0),
    Rect::new(400.0, 180.0, 250.0, 170.0),
    Rect::new(650.0, 220.0, 180.0, 130.0),
];

// --- terrain ---

pub const GROUND_Y: f32 = 400.0;
pub const GROUND_H: f32 = 50.0;
pub const GROUND_GRASS_H: f32 = 10.0;

pub const PLATFORMS: [Rect; 4] = [
    Rect::new(100.0, 350.0, 200.0, 15.0),
    Rect::new(400.0, 300.0, 150.0, 15.0),
    Rect::new(600.0, 250.0, 180.0, 15.0),
    Rect::new(250.0, 200.0, 120.0, 15.0),
];
pub const PLATFORM_GRASS_H: f32 = 5.0;

// --- actors and collectibles ---

/// Coin centers; all sit on or near a platform or the ground.
pub const COINS: [Point; 8] = [
    Point::new(150.0, 320.0),
    Point::new(200.0, 320.0),
    Point::new(250.0, 320.0),
    Point::new(450.0, 270.0),
    Point::new(500.0, 270.0),
    Point::new(650.0, 220.0),
    Point::new(700.0, 220.0),
    Point::new(300.0, 170.0),
];
pub const COIN_RADIUS: f32 = 10.0;

/// Enemy anchors: (x, y) is the bottom-center of the body.
pub const ENEMIES: [Point; 3] = [
    Point::new(350.0, 385.0),
    Point::new(500.0, 385.0),
    Point::new(450.0, 285.0),
];
pub const ENEMY_W: f32 = 20.0;
pub const ENEMY_H: f32 = 15.0;

/// Player anchor: (x, y) is the bottom-left of the body.
pub const PLAYER: Rect = Rect::new(50.0, 370.0, 30.0, 30.0);

// --- HUD ---

pub const SCORE_PANEL: Rect = Rect::new(10.0, 10.0, 150.0, 30.0);
pub const SCORE_TEXT_X: f32 = 20.0;

/// Right-anchored offsets, subtracted from the canvas width.
pub const LIVES_PANEL_OFFSET: f32 = 110.0;
pub const LIVES_PANEL_W: f32 = 100.0;
pub const LIVES_TEXT_OFFSET: f32 = 100.0;
pub const HUD_COIN_OFFSET: f32 = 140.0;
pub const COIN_COUNT_OFFSET: f32 = 125.0;

pub const HUD_PANEL_Y: f32 = 10.0;
pub const HUD_PANEL_H: f32 = 30.0;
pub const HUD_COIN_Y: f32 = 25.0;
pub const HUD_TEXT_BASELINE: f32 = 30.0;
pub const HUD_FONT_PX: f32 = 16.0;
pub const HUD_CORNER_RADIUS: f32 = 6.0;

/// HUD literals; the scene has no game state to derive these from.
pub const SCORE_LABEL: &str = "SCORE: 1250";
pub const LIVES_LABEL: &str = "LIVES: 3";
pub const COIN_COUNT_LABEL: &str = "× 8";
