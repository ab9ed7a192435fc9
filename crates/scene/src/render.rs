//! The scene painter.
//!
//! One deterministic pass, back to front: sky, clouds, mountains, ground,
//! platforms, coins, enemies, player, HUD. Overlap is resolved purely by
//! paint order. All reference coordinates are scaled by the canvas size
//! relative to the 800×450 reference frame.

use tui_platformer_types::{REF_HEIGHT, REF_WIDTH};

use crate::canvas::Canvas;
use crate::layout::{
    CLOUD, CLOUDS, COINS, COIN_COUNT_LABEL, COIN_COUNT_OFFSET, COIN_GOLD, COIN_HIGHLIGHT,
    COIN_RADIUS, EARTH, ENEMIES, ENEMY_BODY, ENEMY_H, ENEMY_W, EYE_PUPIL, EYE_WHITE, GRASS,
    GROUND_GRASS_H, GROUND_H, GROUND_Y, HUD_COIN_OFFSET, HUD_COIN_Y, HUD_CORNER_RADIUS,
    HUD_FONT_PX, HUD_PANEL, HUD_PANEL_H, HUD_PANEL_Y, HUD_TEXT, HUD_TEXT_BASELINE, LIVES_LABEL,
    LIVES_PANEL_OFFSET, LIVES_PANEL_W, LIVES_TEXT_OFFSET, MOUNTAIN, MOUNTAINS, PLATFORMS,
    PLATFORM_GRASS_H, PLAYER, PLAYER_BODY, PLAYER_SKIN, SCORE_LABEL, SCORE_PANEL, SCORE_TEXT_X,
    SKY_BOTTOM, SKY_TOP,
};

/// Paint the full illustration onto `canvas`.
///
/// Skipped entirely on a zero-sized canvas; never panics.
pub fn render_scene(canvas: &mut Canvas) {
    if canvas.is_empty() {
        return;
    }
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;
    let sx = w / REF_WIDTH as f32;
    let sy = h / REF_HEIGHT as f32;

    canvas.fill_vertical_gradient(SKY_TOP, SKY_BOTTOM);

    for cloud in &CLOUDS {
        draw_cloud(canvas, cloud.x * sx, cloud.y * sy, cloud.w * sx, cloud.h * sy);
    }

    for mountain in &MOUNTAINS {
        draw_mountain(
            canvas,
            mountain.x * sx,
            mountain.y * sy,
            mountain.w * sx,
            mountain.h * sy,
        );
    }

    // Ground band with a grass strip on top.
    canvas.fill_rect(0.0, GROUND_Y * sy, w, GROUND_H * sy, EARTH);
    canvas.fill_rect(0.0, GROUND_Y * sy, w, GROUND_GRASS_H * sy, GRASS);

    for platform in &PLATFORMS {
        draw_platform(
            canvas,
            platform.x * sx,
            platform.y * sy,
            platform.w * sx,
            platform.h * sy,
            sy,
        );
    }

    for coin in &COINS {
        draw_coin(canvas, coin.x * sx, coin.y * sy, COIN_RADIUS * sx);
    }

    for enemy in &ENEMIES {
        draw_enemy(canvas, enemy.x * sx, enemy.y * sy, ENEMY_W * sx, ENEMY_H * sy);
    }

    draw_player(
        canvas,
        PLAYER.x * sx,
        PLAYER.y * sy,
        PLAYER.w * sx,
        PLAYER.h * sy,
    );

    draw_hud(canvas, w, sx, sy);
}

/// Three overlapping puffs filled as one shape, so the semi-transparent
/// white blends once across the whole union. (x, y) is the left puff
/// center, `h` its radius.
fn draw_cloud(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    canvas.fill_circles(
        &[
            (x, y, h),
            (x + w * 0.3, y - h * 0.2, h * 0.8),
            (x + w * 0.6, y, h * 0.9),
        ],
        CLOUD,
    );
}

/// Triangle silhouette: apex above the base midpoint.
fn draw_mountain(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    canvas.fill_triangle(x - w / 2.0, y, x, y - h, x + w / 2.0, y, MOUNTAIN);
}

fn draw_platform(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32, sy: f32) {
    canvas.fill_rect(x, y, w, h, EARTH);
    canvas.fill_rect(x, y, w, PLATFORM_GRASS_H * sy, GRASS);
}

fn draw_coin(canvas: &mut Canvas, x: f32, y: f32, radius: f32) {
    canvas.fill_circle(x, y, radius, COIN_GOLD);
    canvas.fill_circle(x, y, radius * 0.7, COIN_HIGHLIGHT);
}

/// (x, y) is the bottom-center of the body.
fn draw_enemy(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    canvas.fill_rect(x - w / 2.0, y - h, w, h, ENEMY_BODY);

    let eye_y = y - h * 0.7;
    canvas.fill_circle(x - w / 4.0, eye_y, w * 0.15, EYE_WHITE);
    canvas.fill_circle(x + w / 4.0, eye_y, w * 0.15, EYE_WHITE);
    canvas.fill_circle(x - w / 4.0, eye_y, w * 0.05, EYE_PUPIL);
    canvas.fill_circle(x + w / 4.0, eye_y, w * 0.05, EYE_PUPIL);
}

/// (x, y) is the bottom-left of the body; the head disc sits above it.
fn draw_player(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    canvas.fill_rect(x, y - h, w, h, PLAYER_BODY);

    let head_y = y - h - w * 0.4;
    canvas.fill_circle(x + w / 2.0, head_y, w * 0.4, PLAYER_SKIN);

    canvas.fill_circle(x + w * 0.35, head_y, w * 0.1, EYE_WHITE);
    canvas.fill_circle(x + w * 0.65, head_y, w * 0.1, EYE_WHITE);
    canvas.fill_circle(x + w * 0.35, head_y, w * 0.05, EYE_PUPIL);
    canvas.fill_circle(x + w * 0.65, head_y, w * 0.05, EYE_PUPIL);
}

fn draw_hud(canvas: &mut Canvas, w: f32, sx: f32, sy: f32) {
    // Text scales uniformly to avoid distortion under non-uniform scaling.
    let s = sx.min(sy);
    let font = HUD_FONT_PX * s;
    let radius = HUD_CORNER_RADIUS * s;
    let baseline = HUD_TEXT_BASELINE * sy;

    canvas.fill_rounded_rect(
        SCORE_PANEL.x * sx,
        SCORE_PANEL.y * sy,
        SCORE_PANEL.w * sx,
        SCORE_PANEL.h * sy,
        radius,
        HUD_PANEL,
    );
    canvas.fill_text(SCORE_TEXT_X * sx, baseline, font, HUD_TEXT, SCORE_LABEL);

    canvas.fill_rounded_rect(
        w - LIVES_PANEL_OFFSET * sx,
        HUD_PANEL_Y * sy,
        LIVES_PANEL_W * sx,
        HUD_PANEL_H * sy,
        radius,
        HUD_PANEL,
    );
    canvas.fill_text(w - LIVES_TEXT_OFFSET * sx, baseline, font, HUD_TEXT, LIVES_LABEL);

    // Coin counter.
    draw_coin(canvas, w - HUD_COIN_OFFSET * sx, HUD_COIN_Y * sy, COIN_RADIUS * sx);
    canvas.fill_text(
        w - COIN_COUNT_OFFSET * sx,
        baseline,
        font,
        HUD_TEXT,
        COIN_COUNT_LABEL,
    );
}
