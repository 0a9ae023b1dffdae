use super::Vec2;

/// Axis-aligned rectangle (origin + size), in local pixels or texels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning `p0..p1`. Callers pass `p0 <= p1` component-wise.
    #[inline]
    pub fn from_points(p0: Vec2, p1: Vec2) -> Self {
        Self { origin: p0, size: p1 - p0 }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks the rectangle by `d` on every side.
    #[inline]
    pub fn inset(self, d: f32) -> Rect {
        Rect::from_origin_size(self.origin + Vec2::splat(d), self.size - Vec2::splat(2.0 * d))
    }

    /// Returns true when `other` lies entirely inside `self` (edges inclusive).
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());
        b0.x >= a0.x && b0.y >= a0.y && b1.x <= a1.x && b1.y <= a1.y
    }

    /// Maps each edge into `[0, 1]` relative to `extent` (texture normalization).
    #[inline]
    pub fn normalized_by(self, extent: Vec2) -> Rect {
        Rect::from_origin_size(self.origin / extent, self.size / extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_spans_both_corners() {
        let rect = Rect::from_points(Vec2::new(2.0, 3.0), Vec2::new(10.0, 7.0));
        assert_eq!(rect, r(2.0, 3.0, 8.0, 4.0));
        assert_eq!(rect.max(), Vec2::new(10.0, 7.0));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_by_half_texel() {
        let rect = r(4.0, 8.0, 16.0, 2.0).inset(0.5);
        assert_eq!(rect, r(4.5, 8.5, 15.0, 1.0));
    }

    // ── contains_rect ─────────────────────────────────────────────────────

    #[test]
    fn contains_rect_edges_inclusive() {
        let outer = r(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rect(outer));
        assert!(outer.contains_rect(r(2.0, 2.0, 8.0, 8.0)));
    }

    #[test]
    fn contains_rect_rejects_overhang() {
        let outer = r(0.0, 0.0, 10.0, 10.0);
        assert!(!outer.contains_rect(r(5.0, 5.0, 6.0, 1.0)));
        assert!(!outer.contains_rect(r(-1.0, 0.0, 2.0, 2.0)));
    }

    // ── normalized_by ─────────────────────────────────────────────────────

    #[test]
    fn normalized_by_texture_extent() {
        let uv = r(16.0, 32.0, 32.0, 64.0).normalized_by(Vec2::new(64.0, 128.0));
        assert_eq!(uv, r(0.25, 0.25, 0.5, 0.5));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
