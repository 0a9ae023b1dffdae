//! Per-corner attribute building.
//!
//! One corner is built by one function over a small layout table: the four
//! corners differ only in which sides they touch and the reflection signs.

use crate::coords::{Rect, Vec2};

use super::color::{quadrant_colors, QuadrantColors};
use super::radius::{resolve_radius, SENTINEL_RADII};
use super::widths::{CssWidths, StyledWidths, WidthAdjust};
use super::{select_style, BorderDescriptor, BorderStyle, CornerGeometry, Side, SideSelect};

/// One of the four corners of a border box.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CornerIndex {
    #[default]
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl CornerIndex {
    pub const ALL: [CornerIndex; 4] = [
        CornerIndex::TopLeft,
        CornerIndex::TopRight,
        CornerIndex::BottomRight,
        CornerIndex::BottomLeft,
    ];

    /// Decodes a raw sub-part index. Out-of-range indices build the top-left corner.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => CornerIndex::TopLeft,
            1 => CornerIndex::TopRight,
            2 => CornerIndex::BottomRight,
            3 => CornerIndex::BottomLeft,
            other => {
                log::debug!("corner sub-part {other} out of range; building top-left");
                CornerIndex::TopLeft
            }
        }
    }

    #[inline]
    pub(super) fn layout(self) -> &'static CornerLayout {
        &LAYOUTS[self as usize]
    }

    /// Reflection signs mapping the top-left case onto this corner.
    #[inline]
    pub fn sign(self) -> Vec2 {
        self.layout().sign
    }
}

/// Which sides a corner touches, and in what role.
pub(super) struct CornerLayout {
    pub sign: Vec2,
    /// Sides supplying color0 and color1.
    pub color_sides: [Side; 2],
    /// `(first, second)` sides for style selection. `first` is color1's side.
    pub style_sides: [Side; 2],
    /// Sides whose widths run along x and y.
    pub width_sides: [Side; 2],
}

const LAYOUTS: [CornerLayout; 4] = [
    CornerLayout {
        sign: Vec2::new(1.0, 1.0),
        color_sides: [Side::Left, Side::Top],
        style_sides: [Side::Top, Side::Left],
        width_sides: [Side::Left, Side::Top],
    },
    CornerLayout {
        sign: Vec2::new(-1.0, 1.0),
        color_sides: [Side::Top, Side::Right],
        style_sides: [Side::Right, Side::Top],
        width_sides: [Side::Right, Side::Top],
    },
    CornerLayout {
        sign: Vec2::new(-1.0, -1.0),
        color_sides: [Side::Right, Side::Bottom],
        style_sides: [Side::Bottom, Side::Right],
        width_sides: [Side::Right, Side::Bottom],
    },
    CornerLayout {
        sign: Vec2::new(1.0, -1.0),
        color_sides: [Side::Bottom, Side::Left],
        style_sides: [Side::Left, Side::Bottom],
        width_sides: [Side::Left, Side::Bottom],
    },
];

impl CornerLayout {
    /// Shading sign of color0's and color1's side.
    fn color_delta(&self) -> Vec2 {
        let [s0, s1] = self.color_sides;
        Vec2::new(s0.axis_component(self.sign), s1.axis_component(self.sign))
    }
}

/// Clip ellipses of a corner.
///
/// Ellipses are centered on `center` and open towards `sign`. `primary`
/// holds the outer and inner edge of the border ring; `secondary` holds the
/// gap edges of a double border, or the split line of groove/ridge.
/// Unused entries hold [`SENTINEL_RADII`](super::SENTINEL_RADII).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipParameters {
    pub center: Vec2,
    pub sign: Vec2,
    pub primary: [Vec2; 2],
    pub secondary: [Vec2; 2],
}

/// Line splitting a corner into its two sides' triangles.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeLine {
    pub point: Vec2,
    /// Normal of the line, scaled by the border widths.
    pub normal: Vec2,
}

/// Straight-edge distances for the part of a corner outside the clip region.
///
/// `distances` is `(x0, y0, x1, y1)`: for double borders the outer line's
/// inner edge and the inner line's outer edge; for groove/ridge only the
/// split line (`x0, y0`); zero otherwise. `alpha_select` is the alpha of
/// fragments between the edges; `sdf_select` chooses how the per-pixel
/// stage combines the secondary ellipses.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeDescriptor {
    pub distances: [f32; 4],
    pub alpha_select: f32,
    pub sdf_select: f32,
}

/// Everything the per-pixel stage needs for one corner instance.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerAttributes {
    pub corner: CornerIndex,
    pub style: BorderStyle,
    /// Local rect covered by the instance.
    pub segment: Rect,
    pub clip: ClipParameters,
    pub edge_line: EdgeLine,
    pub edge: EdgeDescriptor,
    pub colors: QuadrantColors,
}

/// Clip radii for a corner of radius `radius` and `widths`.
pub fn clip_radii(
    style: BorderStyle,
    radius: Vec2,
    widths: &StyledWidths,
) -> ([Vec2; 2], [Vec2; 2]) {
    let w = widths.raw;
    let a = widths.adjusted;

    let primary = [
        resolve_radius(radius, w * 2.0),
        resolve_radius(radius - w, -w),
    ];

    let secondary = match style {
        BorderStyle::Groove | BorderStyle::Ridge => [radius - a, SENTINEL_RADII],
        BorderStyle::Double => [
            resolve_radius(radius - a, -w),
            resolve_radius(radius - w + a, -w),
        ],
        // Dotted and dashed are masked externally; the rest has no inner edges.
        _ => [SENTINEL_RADII, SENTINEL_RADII],
    };

    (primary, secondary)
}

/// Edge descriptor for a corner whose outer point is `outer`.
pub fn edge_descriptor(
    style: BorderStyle,
    outer: Vec2,
    sign: Vec2,
    widths: &StyledWidths,
) -> EdgeDescriptor {
    let near = outer + sign * widths.adjusted;
    let far = outer + sign * widths.complement;

    match style {
        BorderStyle::Double => EdgeDescriptor {
            distances: [near.x, near.y, far.x, far.y],
            alpha_select: 0.0,
            sdf_select: 0.0,
        },
        BorderStyle::Groove | BorderStyle::Ridge => EdgeDescriptor {
            distances: [near.x, near.y, 0.0, 0.0],
            alpha_select: 1.0,
            sdf_select: 1.0,
        },
        _ => EdgeDescriptor {
            distances: [0.0; 4],
            alpha_select: 1.0,
            sdf_select: 0.0,
        },
    }
}

/// Builds corner instances.
///
/// Generic over the width rule; [`CssWidths`] unless the caller supplies one.
#[derive(Debug, Clone, Default)]
pub struct CornerBuilder<W = CssWidths> {
    widths: W,
}

impl CornerBuilder<CssWidths> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WidthAdjust> CornerBuilder<W> {
    pub fn with_width_rule(widths: W) -> Self {
        Self { widths }
    }

    /// Builds the attributes of one corner instance.
    pub fn build(
        &self,
        border: &BorderDescriptor,
        geometry: &CornerGeometry,
        corner: CornerIndex,
        select: SideSelect,
    ) -> CornerAttributes {
        let layout = corner.layout();
        let sign = layout.sign;
        let outer = geometry.outer(corner);
        let inner = geometry.inner(corner);
        let radius = border.radius(corner);

        let [style0, style1] = layout.style_sides;
        let style = select_style(select, [border.style(style0), border.style(style1)]);

        let [x_side, y_side] = layout.width_sides;
        let raw = Vec2::new(border.width(x_side), border.width(y_side));
        let widths = StyledWidths::new(&self.widths, style, raw);

        let (primary, secondary) = clip_radii(style, radius, &widths);
        let mut clip = ClipParameters {
            center: outer + sign * radius,
            sign,
            primary,
            secondary,
        };

        // Dotted corners are clipped entirely by the external mask.
        if style == BorderStyle::Dotted {
            clip.sign = Vec2::zero();
        }

        let gradient = raw * sign;
        let edge_line = EdgeLine {
            point: outer,
            normal: Vec2::new(-gradient.y, gradient.x),
        };

        let [side0, side1] = layout.color_sides;
        let colors = quadrant_colors(
            border.color(side0),
            border.color(side1),
            style,
            layout.color_delta(),
            select,
        );

        log::trace!("corner {corner:?}: style {style:?}, select {select:?}, radius {radius:?}");

        CornerAttributes {
            corner,
            style,
            segment: Rect::from_points(outer.min(inner), outer.max(inner)),
            clip,
            edge_line,
            edge: edge_descriptor(style, outer, sign, &widths),
            colors,
        }
    }

    /// Builds all four corners of a border drawn over `local_rect`.
    pub fn build_border(
        &self,
        border: &BorderDescriptor,
        local_rect: Rect,
        select: SideSelect,
    ) -> [CornerAttributes; 4] {
        let geometry = CornerGeometry::from_local_rect(local_rect, border);
        CornerIndex::ALL.map(|corner| self.build(border, &geometry, corner, select))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::SENTINEL_RADII;
    use crate::coords::{ColorRgba, CornerRadii};

    const COLORS: [ColorRgba; 4] = [
        ColorRgba::new(1.0, 0.0, 0.0, 1.0),
        ColorRgba::new(0.0, 1.0, 0.0, 1.0),
        ColorRgba::new(0.0, 0.0, 1.0, 1.0),
        ColorRgba::new(1.0, 1.0, 0.0, 1.0),
    ];

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 80.0)
    }

    fn uniform(width: f32, style: BorderStyle, radii: CornerRadii) -> BorderDescriptor {
        BorderDescriptor::uniform(width, style, COLORS, radii)
    }

    fn build_all(border: &BorderDescriptor) -> [CornerAttributes; 4] {
        CornerBuilder::new().build_border(border, rect(), SideSelect::Both)
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn reflection_signs_per_corner() {
        assert_eq!(CornerIndex::TopLeft.sign(), Vec2::new(1.0, 1.0));
        assert_eq!(CornerIndex::TopRight.sign(), Vec2::new(-1.0, 1.0));
        assert_eq!(CornerIndex::BottomRight.sign(), Vec2::new(-1.0, -1.0));
        assert_eq!(CornerIndex::BottomLeft.sign(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn color_delta_follows_side_axes() {
        let deltas = CornerIndex::ALL.map(|c| c.layout().color_delta());
        assert_eq!(
            deltas,
            [
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, -1.0),
                Vec2::new(-1.0, 1.0),
            ]
        );
    }

    #[test]
    fn out_of_range_index_builds_top_left() {
        assert_eq!(CornerIndex::from_index(4), CornerIndex::TopLeft);
        assert_eq!(CornerIndex::from_index(2), CornerIndex::BottomRight);
    }

    // ── solid ─────────────────────────────────────────────────────────────

    #[test]
    fn uniform_solid_top_left() {
        let border = uniform(4.0, BorderStyle::Solid, CornerRadii::all(10.0));
        let tl = build_all(&border)[0];

        assert_eq!(tl.style, BorderStyle::Solid);
        assert_eq!(tl.segment, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(tl.clip.center, Vec2::new(10.0, 10.0));
        assert_eq!(tl.clip.sign, Vec2::new(1.0, 1.0));
        assert_eq!(tl.clip.primary, [Vec2::splat(10.0), Vec2::splat(6.0)]);
        assert_eq!(tl.clip.secondary, [SENTINEL_RADII, SENTINEL_RADII]);
        let expected = EdgeDescriptor {
            distances: [0.0; 4],
            alpha_select: 1.0,
            sdf_select: 0.0,
        };
        assert_eq!(tl.edge, expected);
        assert_eq!(tl.edge_line, EdgeLine { point: Vec2::zero(), normal: Vec2::new(-4.0, 4.0) });
    }

    #[test]
    fn mirrored_corners_center_inside_the_box() {
        let border = uniform(4.0, BorderStyle::Solid, CornerRadii::all(10.0));
        let [_, tr, br, bl] = build_all(&border);

        assert_eq!(tr.clip.center, Vec2::new(90.0, 10.0));
        assert_eq!(br.clip.center, Vec2::new(90.0, 70.0));
        assert_eq!(bl.clip.center, Vec2::new(10.0, 70.0));

        assert_eq!(tr.segment, Rect::new(90.0, 0.0, 10.0, 10.0));
        assert_eq!(br.segment, Rect::new(90.0, 70.0, 10.0, 10.0));
        assert_eq!(bl.segment, Rect::new(0.0, 70.0, 10.0, 10.0));
    }

    #[test]
    fn square_corner_falls_back_to_width_radii() {
        let border = uniform(4.0, BorderStyle::Solid, CornerRadii::zero());
        let tl = build_all(&border)[0];
        assert_eq!(tl.clip.primary, [Vec2::splat(8.0), Vec2::splat(-4.0)]);
        assert_eq!(tl.clip.center, Vec2::zero());
    }

    #[test]
    fn corner_colors_follow_adjacent_sides() {
        let border = uniform(4.0, BorderStyle::Solid, CornerRadii::all(10.0));
        let corners = build_all(&border);
        let pairs = corners.map(|c| (c.colors.c00, c.colors.c10));
        assert_eq!(pairs[0], (COLORS[0], COLORS[1]));
        assert_eq!(pairs[1], (COLORS[1], COLORS[2]));
        assert_eq!(pairs[2], (COLORS[2], COLORS[3]));
        assert_eq!(pairs[3], (COLORS[3], COLORS[0]));
    }

    // ── sentinel invariant ────────────────────────────────────────────────

    #[test]
    fn secondary_is_sentinel_unless_double_groove_or_ridge() {
        for style in [
            BorderStyle::None,
            BorderStyle::Solid,
            BorderStyle::Dotted,
            BorderStyle::Dashed,
            BorderStyle::Inset,
            BorderStyle::Outset,
        ] {
            let border = BorderDescriptor::uniform(6.0, style, COLORS, CornerRadii::all(12.0));
            for c in build_all(&border) {
                assert_eq!(c.clip.secondary, [SENTINEL_RADII, SENTINEL_RADII], "{style:?}");
            }
        }
    }

    // ── double ────────────────────────────────────────────────────────────

    #[test]
    fn double_top_left_radii_and_edges() {
        let border = uniform(9.0, BorderStyle::Double, CornerRadii::all(20.0));
        let tl = build_all(&border)[0];

        // adjusted = 3, complement = 6
        assert_eq!(tl.clip.secondary, [Vec2::splat(17.0), Vec2::splat(14.0)]);
        assert_eq!(tl.edge.distances, [3.0, 3.0, 6.0, 6.0]);
        assert_eq!((tl.edge.alpha_select, tl.edge.sdf_select), (0.0, 0.0));
    }

    #[test]
    fn double_bottom_right_edges_mirror() {
        let border = uniform(9.0, BorderStyle::Double, CornerRadii::all(20.0));
        let br = build_all(&border)[2];
        assert_eq!(br.edge.distances, [97.0, 77.0, 94.0, 74.0]);
    }

    #[test]
    fn double_square_corner_uses_negative_width_fallback() {
        let border = uniform(9.0, BorderStyle::Double, CornerRadii::zero());
        let tl = build_all(&border)[0];
        assert_eq!(tl.clip.secondary, [Vec2::splat(-9.0), Vec2::splat(-9.0)]);
    }

    // ── groove / ridge ────────────────────────────────────────────────────

    #[test]
    fn groove_uses_split_ellipse_and_sdf() {
        let border = uniform(6.0, BorderStyle::Groove, CornerRadii::all(10.0));
        let tr = build_all(&border)[1];

        assert_eq!(tr.clip.secondary, [Vec2::splat(7.0), SENTINEL_RADII]);
        assert_eq!(tr.edge.distances, [97.0, 3.0, 0.0, 0.0]);
        assert_eq!((tr.edge.alpha_select, tr.edge.sdf_select), (1.0, 1.0));
    }

    #[test]
    fn ridge_shades_opposite_to_groove() {
        let groove = uniform(6.0, BorderStyle::Groove, CornerRadii::all(10.0));
        let ridge = uniform(6.0, BorderStyle::Ridge, CornerRadii::all(10.0));
        let g = build_all(&groove)[0].colors;
        let r = build_all(&ridge)[0].colors;
        assert_eq!(g.c00, r.c01);
        assert_eq!(g.c01, r.c00);
    }

    // ── dotted / mixed ────────────────────────────────────────────────────

    #[test]
    fn dotted_disables_clip_sign() {
        let border = uniform(4.0, BorderStyle::Dotted, CornerRadii::all(10.0));
        for c in build_all(&border) {
            assert_eq!(c.clip.sign, Vec2::zero());
            assert_eq!(c.edge.distances, [0.0; 4]);
            assert_eq!((c.edge.alpha_select, c.edge.sdf_select), (1.0, 0.0));
        }
    }

    #[test]
    fn dashed_next_to_solid_builds_solid() {
        let mut border = uniform(4.0, BorderStyle::Solid, CornerRadii::all(10.0));
        border.styles[Side::Top as usize] = BorderStyle::Dashed;
        let [tl, tr, br, bl] = build_all(&border);
        assert_eq!(tl.style, BorderStyle::Solid);
        assert_eq!(tr.style, BorderStyle::Solid);
        assert_eq!(br.style, BorderStyle::Solid);
        assert_eq!(bl.style, BorderStyle::Solid);
    }

    #[test]
    fn split_instances_take_each_side_style() {
        let mut border = uniform(6.0, BorderStyle::Solid, CornerRadii::all(10.0));
        border.styles[Side::Top as usize] = BorderStyle::Groove;
        let geometry = CornerGeometry::from_local_rect(rect(), &border);
        let builder = CornerBuilder::new();

        let first = builder.build(&border, &geometry, CornerIndex::TopLeft, SideSelect::First);
        let second = builder.build(&border, &geometry, CornerIndex::TopLeft, SideSelect::Second);

        assert_eq!(first.style, BorderStyle::Groove);
        assert_eq!(second.style, BorderStyle::Solid);
        // First draws the top side, so the left color is hidden.
        assert_eq!(first.colors.c00.a, 0.0);
        assert_eq!(second.colors.c10.a, 0.0);
    }

    // ── width rule ────────────────────────────────────────────────────────

    struct HalfWidths;

    impl WidthAdjust for HalfWidths {
        fn adjust(&self, _style: BorderStyle, width: f32) -> f32 {
            width * 0.5
        }
    }

    #[test]
    fn custom_width_rule_feeds_edges() {
        let border = uniform(8.0, BorderStyle::Double, CornerRadii::all(20.0));
        let corners = CornerBuilder::with_width_rule(HalfWidths)
            .build_border(&border, rect(), SideSelect::Both);
        assert_eq!(corners[0].edge.distances, [4.0, 4.0, 4.0, 4.0]);
    }
}
