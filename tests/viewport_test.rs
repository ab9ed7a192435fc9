use tui_platformer::scene::{compute_dimensions, Dimensions};

#[test]
fn height_follows_16_9_with_cap_for_all_widths() {
    for w in 0..=2000u32 {
        let dims = compute_dimensions(w);
        let expected = ((w as f64 * 0.5625).floor() as u32).min(450);
        assert_eq!(dims.width, w, "width must pass through unchanged");
        assert_eq!(dims.height, expected, "height mismatch at width {w}");
    }
}

#[test]
fn reference_width_gives_unit_scale() {
    let dims = compute_dimensions(800);
    assert_eq!(dims, Dimensions::new(800, 450));
    assert_eq!(dims.scale(), (1.0, 1.0));
}

#[test]
fn half_reference_width_gives_half_scale() {
    let dims = compute_dimensions(400);
    assert_eq!(dims, Dimensions::new(400, 225));
    assert_eq!(dims.scale(), (0.5, 0.5));
}

#[test]
fn zero_width_gives_zero_height() {
    let dims = compute_dimensions(0);
    assert_eq!(dims.height, 0);
    assert!(dims.is_empty());
}

#[test]
fn wide_containers_letterbox_instead_of_growing() {
    // Past 800 the height stays pinned while the width keeps growing,
    // producing non-uniform scale factors.
    let dims = compute_dimensions(896);
    assert_eq!(dims, Dimensions::new(896, 450));
    let (sx, sy) = dims.scale();
    assert!(sx > 1.0);
    assert_eq!(sy, 1.0);
}
