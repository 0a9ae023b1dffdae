use crate::coords::{Rect, Vec2};

use super::{BorderDescriptor, CornerIndex};

/// Outer and inner point of each corner of a border box.
///
/// The outer point is the box corner; the inner point is where the corner
/// region ends, `max(radius, width)` in from the outer point on each axis.
/// Arrays are indexed by [`CornerIndex`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerGeometry {
    pub outer: [Vec2; 4],
    pub inner: [Vec2; 4],
}

impl CornerGeometry {
    /// Derives the corner points from the border's local rect.
    pub fn from_local_rect(rect: Rect, border: &BorderDescriptor) -> Self {
        let (p0, p1) = (rect.min(), rect.max());
        let outer = [
            p0,
            Vec2::new(p1.x, p0.y),
            p1,
            Vec2::new(p0.x, p1.y),
        ];

        let inner = CornerIndex::ALL.map(|corner| {
            let layout = corner.layout();
            let [x_side, y_side] = layout.width_sides;
            let widths = Vec2::new(border.width(x_side), border.width(y_side));
            let extent = border.radius(corner).max(widths);
            outer[corner as usize] + layout.sign * extent
        });

        Self { outer, inner }
    }

    #[inline]
    pub fn outer(&self, corner: CornerIndex) -> Vec2 {
        self.outer[corner as usize]
    }

    #[inline]
    pub fn inner(&self, corner: CornerIndex) -> Vec2 {
        self.inner[corner as usize]
    }
}
