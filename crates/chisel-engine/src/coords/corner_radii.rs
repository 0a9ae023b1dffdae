use super::Vec2;

/// Elliptical per-corner radii (local pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Non-positive components mean "square corner"; consumers resolve them against
/// a width-derived fallback rather than clamping.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(
        top_left: Vec2,
        top_right: Vec2,
        bottom_right: Vec2,
        bottom_left: Vec2,
    ) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        let v = Vec2::splat(r);
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// GPU packing: `[(tl, tr), (br, bl)]`, two radii per 4-wide group.
    #[inline]
    pub fn packed(&self) -> [[f32; 4]; 2] {
        [
            [self.top_left.x, self.top_left.y, self.top_right.x, self.top_right.y],
            [self.bottom_right.x, self.bottom_right.y, self.bottom_left.x, self.bottom_left.y],
        ]
    }
}
