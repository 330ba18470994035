use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
///
/// Designed for raw buffer access with bytemuck so a rasterized grid can be
/// handed to a renderer or encoder without copying.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the rasterization background.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    // The sixteen pen colors selectable during play.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const GRAY: Rgba = Rgba::opaque(128, 128, 128);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const ORANGE: Rgba = Rgba::opaque(255, 165, 0);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 128, 0);
    pub const CYAN: Rgba = Rgba::opaque(0, 255, 255);
    pub const PINK: Rgba = Rgba::opaque(245, 121, 206);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const DARK_GRAY: Rgba = Rgba::opaque(61, 61, 61);
    pub const MAROON: Rgba = Rgba::opaque(102, 0, 0);
    pub const BROWN: Rgba = Rgba::opaque(150, 75, 0);
    pub const OLIVE: Rgba = Rgba::opaque(139, 128, 0);
    pub const DARK_GREEN: Rgba = Rgba::opaque(4, 74, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const PURPLE: Rgba = Rgba::opaque(133, 22, 201);

    /// Create a color from the four channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB channel values.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Whether this pixel counts as background (alpha of exactly zero).
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// A single circular brush deposit.
///
/// Marks are immutable once created and owned by the [`StrokeCanvas`] that
/// created them; they are removed only by a bulk erase or by dropping the
/// canvas.
///
/// [`StrokeCanvas`]: crate::canvas::StrokeCanvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InkMark {
    /// Center in canvas coordinates. May lie outside the canvas box.
    pub center: DVec2,
    /// Disk radius in pixels, always positive.
    pub radius: u32,
    /// Fill color.
    pub color: Rgba,
}

impl InkMark {
    /// Create a new mark at the given position.
    pub fn new(center: DVec2, radius: u32, color: Rgba) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Whether this mark's disk intersects a circle at `center` with `radius`
    /// (strict: touching circles do not intersect).
    #[inline]
    pub fn intersects_circle(&self, center: DVec2, radius: u32) -> bool {
        let reach = (self.radius + radius) as f64;
        self.center.distance_squared(center) < reach * reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_constant() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::BLACK.is_transparent());
    }

    #[test]
    fn test_opaque_alpha() {
        let color = Rgba::opaque(10, 20, 30);
        assert_eq!(color.a, 255);
        assert!(!color.is_transparent());
    }

    #[test]
    fn test_mark_intersection() {
        let mark = InkMark::new(DVec2::new(10.0, 10.0), 5, Rgba::BLACK);

        // Overlapping circle
        assert!(mark.intersects_circle(DVec2::new(12.0, 10.0), 5));
        // Far away circle
        assert!(!mark.intersects_circle(DVec2::new(100.0, 100.0), 5));
        // Exactly touching circles do not count as intersecting
        assert!(!mark.intersects_circle(DVec2::new(20.0, 10.0), 5));
    }
}
