use crate::coords::Vec2;

/// Radius of an ellipse that no point is ever inside.
///
/// Unused clip ellipses are filled with `(SENTINEL_RADIUS, SENTINEL_RADIUS)`.
/// The per-pixel evaluator treats any radius with a non-positive component as
/// "outside everywhere", so the ellipse drops out without a branch. Any
/// consumer of corner attributes must honor that contract.
pub const SENTINEL_RADIUS: f32 = -100.0;

/// The sentinel as a radius pair.
pub const SENTINEL_RADII: Vec2 = Vec2::splat(SENTINEL_RADIUS);

/// Returns `radius` when both components are strictly positive, else `fallback`.
///
/// Callers pick the fallback so that a square corner flows through the same
/// arithmetic as a rounded one.
#[inline]
pub fn resolve_radius(radius: Vec2, fallback: Vec2) -> Vec2 {
    if radius.all_positive() {
        radius
    } else {
        fallback
    }
}
