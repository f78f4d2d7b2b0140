//! Loaded landmark sequence and the geometry derived from it.

/// Centroid and bounding radius of a point sequence.
pub mod geometry;

/// Landmark store resource holding the current sequence, derived geometry and load status.
pub mod store;

#[cfg(test)]
pub mod test_support {
    use bevy::prelude::*;

    /// Small face-shaped cloud in source space: a ring of points around a nose tip.
    pub fn sample_face() -> Vec<Vec3> {
        let mut points: Vec<Vec3> = (0..12)
            .map(|i| {
                let angle = i as f32 / 12.0 * std::f32::consts::TAU;
                Vec3::new(0.5 + 0.2 * angle.cos(), -0.1 + 0.25 * angle.sin(), 0.02)
            })
            .collect();
        points.push(Vec3::new(0.5, -0.1, -0.06));
        points
    }
}
