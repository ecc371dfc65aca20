//! Steering math for zombie movement
//!
//! Everything returns plain vectors; callers decide what to do with them.
//! Normalization of a zero vector yields the zero vector, never NaN.

use glam::Vec2;

use crate::consts::SEPARATION_WEIGHT;

/// Unit vector from `from` toward `to`; zero if the points coincide
#[inline]
pub fn chase(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Unit vector along a wander heading
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Accumulated repulsion away from neighbors inside `radius`.
///
/// Each neighbor contributes a push along the line between the two
/// positions, weighted `(radius - d) / radius` so closer neighbors push
/// harder. Exactly coincident neighbors contribute nothing (no direction
/// to push along).
pub fn separation(pos: Vec2, neighbors: impl Iterator<Item = Vec2>, radius: f32) -> Vec2 {
    let mut force = Vec2::ZERO;
    for other in neighbors {
        let d = pos.distance(other);
        if d > 0.0 && d < radius {
            let strength = (radius - d) / radius;
            force += (pos - other) / d * strength;
        }
    }
    force
}

/// Blend a primary movement vector with a separation force and renormalize.
///
/// Returns a unit vector, or zero when the inputs cancel exactly.
#[inline]
pub fn blend(primary: Vec2, sep: Vec2) -> Vec2 {
    (primary + sep * SEPARATION_WEIGHT).normalize_or_zero()
}
