//! Responsive sizing: hosting-container width to canvas dimensions.

use tui_platformer_types::{REF_HEIGHT, REF_WIDTH};

/// 16:9 aspect, expressed as the height factor (9/16).
const ASPECT: f64 = 0.5625;

/// Canvas dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Per-axis scale factors relative to the 800×450 reference frame.
    pub fn scale(&self) -> (f32, f32) {
        (
            self.width as f32 / REF_WIDTH as f32,
            self.height as f32 / REF_HEIGHT as f32,
        )
    }
}

/// Derive canvas dimensions from the measured container width.
///
/// Width is taken as-is; height keeps a 16:9 proportion, floored, and is
/// capped at the reference height so very wide containers letterbox instead
/// of growing vertically.
pub fn compute_dimensions(container_width: u32) -> Dimensions {
    let height = (container_width as f64 * ASPECT).floor() as u32;
    Dimensions {
        width: container_width,
        height: height.min(REF_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_width_yields_reference_dimensions() {
        let dims = compute_dimensions(800);
        assert_eq!(dims, Dimensions::new(800, 450));
        assert_eq!(dims.scale(), (1.0, 1.0));
    }

    #[test]
    fn height_is_floored() {
        // 799 * 0.5625 = 449.4375
        assert_eq!(compute_dimensions(799).height, 449);
    }

    #[test]
    fn height_is_capped_at_reference_height() {
        assert_eq!(compute_dimensions(2000).height, 450);
    }

    #[test]
    fn zero_width_is_empty() {
        let dims = compute_dimensions(0);
        assert_eq!(dims, Dimensions::new(0, 0));
        assert!(dims.is_empty());
    }
}
