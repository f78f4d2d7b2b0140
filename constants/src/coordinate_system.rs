use bevy::prelude::*;

/// Reflection applied to the whole landmark cloud for display (row-major).
/// Source data is y-down and z-into-screen, so y and z are negated.
pub const DISPLAY_REFLECTION: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],  // X = X
    [0.0, -1.0, 0.0], // Y = -Y
    [0.0, 0.0, -1.0], // Z = -Z
];

/// Same reflection expressed as a transform scale for the cloud root.
pub const DISPLAY_SCALE: Vec3 = Vec3::new(1.0, -1.0, -1.0);

/// Map a source-space point into view space.
pub fn to_view_space(point: Vec3) -> Vec3 {
    let input = point.to_array();
    let mut output = [0.0; 3];

    for i in 0..3 {
        for j in 0..3 {
            output[i] += DISPLAY_REFLECTION[i][j] * input[j];
        }
    }

    Vec3::from_array(output)
}

/// Map a view-space point back into source space. The reflection is its own inverse.
pub fn to_source_space(point: Vec3) -> Vec3 {
    to_view_space(point)
}
