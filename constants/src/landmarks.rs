/// Landmark file, relative to the asset root.
pub const LANDMARK_ASSET_PATH: &str = "landmarks.json";

/// Added to every landmark's y coordinate at load time.
pub const LANDMARK_VERTICAL_OFFSET: f32 = -0.6;

/// Number of points in a face mesh landmark set.
pub const FACE_MESH_LANDMARK_COUNT: usize = 468;

/// Bounding radius reported for an empty landmark set.
pub const EMPTY_BOUNDING_RADIUS: f32 = 1.0;
