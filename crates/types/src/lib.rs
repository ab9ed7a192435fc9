//! Shared data types and constants.
//!
//! Pure data only, with no I/O and no external dependencies, so every
//! other crate (scene core, terminal backend, tests) can use these freely.
//!
//! # Reference frame
//!
//! Every shape in the scene is specified in a fixed 800×450 coordinate
//! system and scaled at draw time. The canvas height is capped at the
//! reference height, so a wide surface never stretches past it.

/// Width of the reference design frame, in logical pixels.
pub const REF_WIDTH: u32 = 800;

/// Height of the reference design frame. Also the maximum canvas height.
pub const REF_HEIGHT: u32 = 450;

/// Maximum width of the hosting container, in logical pixels.
///
/// The original page hosts the canvas in a container capped at this width;
/// wider windows center the scene instead of growing it.
pub const MAX_CONTAINER_WIDTH: u32 = 896;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`, `t` in `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// RGB color with an alpha component, used as a paint source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Drop the alpha component.
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Source-over blend onto an opaque destination pixel.
    pub fn over(self, dst: Rgb) -> Rgb {
        let a = self.a as u32;
        let inv = 255 - a;
        let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
        Rgb::new(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_over_replaces_destination() {
        let dst = Rgb::new(10, 20, 30);
        assert_eq!(Rgba::opaque(200, 100, 50).over(dst), Rgb::new(200, 100, 50));
    }

    #[test]
    fn transparent_over_keeps_destination() {
        let dst = Rgb::new(10, 20, 30);
        assert_eq!(Rgba::new(200, 100, 50, 0).over(dst), dst);
    }

    #[test]
    fn half_alpha_black_over_white_is_mid_gray() {
        let blended = Rgba::new(0, 0, 0, 128).over(Rgb::new(255, 255, 255));
        assert_eq!(blended, Rgb::new(127, 127, 127));
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Rgb::new(135, 206, 235);
        let b = Rgb::new(224, 247, 255);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
