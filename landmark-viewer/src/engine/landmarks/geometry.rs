use bevy::prelude::*;
use constants::landmarks::EMPTY_BOUNDING_RADIUS;

/// Arithmetic mean of all points. The origin for an empty slice.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }

    points.iter().copied().sum::<Vec3>() / points.len() as f32
}

/// Largest distance from `center` to any point. `EMPTY_BOUNDING_RADIUS` for an empty
/// slice so camera framing never divides by zero.
pub fn bounding_radius(points: &[Vec3], center: Vec3) -> f32 {
    if points.is_empty() {
        return EMPTY_BOUNDING_RADIUS;
    }

    points
        .iter()
        .map(|p| p.distance(center))
        .fold(0.0, f32::max)
}
