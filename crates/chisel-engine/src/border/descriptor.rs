use crate::coords::{ColorRgba, CornerRadii, Vec2};

use super::{BorderStyle, CornerIndex};

/// One side of a border box.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Side {
    /// Left and right sides have their width measured along x.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Picks the component of a per-axis pair that this side's width runs along.
    #[inline]
    pub fn axis_component(self, v: Vec2) -> f32 {
        if self.is_vertical() { v.x } else { v.y }
    }
}

/// Decoded border of one primitive.
///
/// Per-side arrays are indexed by [`Side`] (left, top, right, bottom).
/// Owned by the caller and only read while building corner instances.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BorderDescriptor {
    pub widths: [f32; 4],
    pub styles: [BorderStyle; 4],
    pub colors: [ColorRgba; 4],
    pub radii: CornerRadii,
}

impl BorderDescriptor {
    pub fn new(
        widths: [f32; 4],
        styles: [BorderStyle; 4],
        colors: [ColorRgba; 4],
        radii: CornerRadii,
    ) -> Self {
        Self { widths, styles, colors, radii }
    }

    /// Same width and style on every side.
    pub fn uniform(
        width: f32,
        style: BorderStyle,
        colors: [ColorRgba; 4],
        radii: CornerRadii,
    ) -> Self {
        Self::new([width; 4], [style; 4], colors, radii)
    }

    #[inline]
    pub fn width(&self, side: Side) -> f32 {
        self.widths[side as usize]
    }

    #[inline]
    pub fn style(&self, side: Side) -> BorderStyle {
        self.styles[side as usize]
    }

    #[inline]
    pub fn color(&self, side: Side) -> ColorRgba {
        self.colors[side as usize]
    }

    #[inline]
    pub fn radius(&self, corner: CornerIndex) -> Vec2 {
        match corner {
            CornerIndex::TopLeft => self.radii.top_left,
            CornerIndex::TopRight => self.radii.top_right,
            CornerIndex::BottomRight => self.radii.bottom_right,
            CornerIndex::BottomLeft => self.radii.bottom_left,
        }
    }

    /// GPU packing of the widths, `(left, top, right, bottom)`.
    #[inline]
    pub fn packed_widths(&self) -> [f32; 4] {
        self.widths
    }

    /// GPU packing of the style codes, `(left, top, right, bottom)`.
    pub fn packed_styles(&self) -> [u32; 4] {
        self.styles.map(BorderStyle::code)
    }

    /// GPU packing of the radii, see [`CornerRadii::packed`].
    #[inline]
    pub fn packed_radii(&self) -> [[f32; 4]; 2] {
        self.radii.packed()
    }
}
