//! CPU reference for the per-pixel border-corner stage.
//!
//! The GPU evaluates this per covered fragment; the CPU version exists so the
//! attribute records can be checked end to end, and it pins down the sentinel
//! contract: an ellipse whose radius has a non-positive component is never
//! inside.

use crate::coords::{ColorRgba, Vec2};

use super::CornerAttributes;

/// Distance reported for disabled (non-positive) ellipses.
pub const OUTSIDE_DISTANCE: f32 = 1.0e6;

/// Approximate signed distance from `p` to an origin-centered ellipse.
///
/// Negative inside. Uses the first-order `g / |∇g|` estimate, exact for
/// circles near the boundary.
pub fn ellipse_distance(p: Vec2, radii: Vec2) -> f32 {
    if !radii.all_positive() {
        return OUTSIDE_DISTANCE;
    }
    let inv_sq = Vec2::new(1.0 / (radii.x * radii.x), 1.0 / (radii.y * radii.y));
    let g = p.dot(p * inv_sq) - 1.0;
    let grad = p * inv_sq * 2.0;
    let len = grad.length();
    if len == 0.0 {
        return -radii.x.min(radii.y);
    }
    g / len
}

/// Signed distance from `p` to the line through `point` with normal `normal`.
///
/// Positive on the side `normal` points away from. A zero normal (zero-width
/// corner) puts every point on the line.
pub fn line_distance(point: Vec2, normal: Vec2, p: Vec2) -> f32 {
    let len = normal.length();
    if len == 0.0 {
        return 0.0;
    }
    (normal / len).dot(point - p)
}

/// Hermite smoothstep; degenerates to a step when `e0 >= e1`.
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e0 >= e1 {
        return if x < e0 { 0.0 } else { 1.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Shades one local position of a corner instance.
///
/// `aa_range` is the anti-aliasing width in local units (one device pixel
/// at scale 1). Dotted and dashed masking is not applied here; callers
/// multiply in their clip mask.
pub fn evaluate(attrs: &CornerAttributes, pos: Vec2, aa_range: f32) -> ColorRgba {
    let clip = &attrs.clip;
    let edge = &attrs.edge;
    let half_aa = 0.5 * aa_range;

    let (alpha, mix_factor) = if (pos * clip.sign).all_lt(clip.center * clip.sign) {
        let p = pos - clip.center;
        let d0 = ellipse_distance(p, clip.primary[0]);
        let d1 = ellipse_distance(p, clip.primary[1]);
        let d2 = ellipse_distance(p, clip.secondary[0]);
        let d3 = ellipse_distance(p, clip.secondary[1]);

        let d_main = d0.max(half_aa - d1);
        let d_inner = (d2 - half_aa).max(-d3);
        let d = if edge.sdf_select > 0.5 { d_main } else { d_main.max(-d_inner) };

        (1.0 - smoothstep(0.0, half_aa, d), smoothstep(-half_aa, half_aa, -d2))
    } else {
        // Straight part of the corner: edges are whole pixels, no AA.
        let [x0, y0, x1, y1] = edge.distances;
        let dx = Vec2::new(pos.x - x0, pos.x - x1) * clip.sign.x;
        let dy = Vec2::new(pos.y - y0, pos.y - y1) * clip.sign.y;
        let da = dx.x.min(dy.x);
        let db = (-dx.y).max(-dy.y);
        let d = da.min(db);

        let alpha = if d < 0.0 { 1.0 } else { edge.alpha_select };
        (alpha, if da > 0.0 { 1.0 } else { 0.0 })
    };

    let colors = &attrs.colors;
    let color0 = colors.c00.lerp(colors.c01, mix_factor);
    let color1 = colors.c10.lerp(colors.c11, mix_factor);

    let ld = line_distance(attrs.edge_line.point, attrs.edge_line.normal, pos);
    let m = smoothstep(-half_aa, half_aa, ld);
    let color = color0.lerp(color1, m);

    color.with_alpha(color.a * alpha)
}
