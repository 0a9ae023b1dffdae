use crate::coords::{ColorRgba, Vec2};

use super::{BorderStyle, SideSelect};

/// Bevel strength for groove/ridge shading.
const BEVEL: f32 = 0.3;

/// The four colors of a corner's 2x2 grid.
///
/// First index picks the side (`0` = color0's side, `1` = color1's side),
/// second index picks the half (`0` = outer, `1` = inner for groove/ridge).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct QuadrantColors {
    pub c00: ColorRgba,
    pub c01: ColorRgba,
    pub c10: ColorRgba,
    pub c11: ColorRgba,
}

/// Per-quadrant rgb factors for a style.
///
/// `delta` holds the shading sign of color0's and color1's side. Ridge is
/// groove with the sign flipped; every other style is unshaded.
pub fn modulation(style: BorderStyle, delta: Vec2) -> [f32; 4] {
    let d = match style {
        BorderStyle::Groove => delta,
        BorderStyle::Ridge => -delta,
        _ => return [1.0; 4],
    };
    [
        1.0 - BEVEL * d.x,
        1.0 + BEVEL * d.x,
        1.0 - BEVEL * d.y,
        1.0 + BEVEL * d.y,
    ]
}

/// Computes the quadrant colors for one corner instance.
///
/// `visible` hides one side when a corner is split into two draws: `First`
/// clears color0's alpha, `Second` clears color1's.
pub fn quadrant_colors(
    color0: ColorRgba,
    color1: ColorRgba,
    style: BorderStyle,
    delta: Vec2,
    visible: SideSelect,
) -> QuadrantColors {
    let m = modulation(style, delta);

    let (color0, color1) = match visible {
        SideSelect::Both => (color0, color1),
        SideSelect::First => (color0.with_alpha(0.0), color1),
        SideSelect::Second => (color0, color1.with_alpha(0.0)),
    };

    QuadrantColors {
        c00: color0.scale_rgb(m[0]),
        c01: color0.scale_rgb(m[1]),
        c10: color1.scale_rgb(m[2]),
        c11: color1.scale_rgb(m[3]),
    }
}
