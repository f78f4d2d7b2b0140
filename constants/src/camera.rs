/// Vertical field of view of the viewer camera, in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 30.0;

/// Fit scale used by the index-set viewer. Larger values move the camera closer.
pub const FIT_SCALE_SET: f32 = 1.5;

/// Fit scale used by the single-index viewer.
pub const FIT_SCALE_SINGLE: f32 = 1.0;

/// Distance moved by one discrete pan step, in view-space units.
pub const PAN_STEP: f32 = 0.1;

/// Fraction of the remaining distance covered per frame while focusing a point.
pub const FOCUS_LERP_FACTOR: f32 = 0.1;

/// Focus animation snaps to its goal once closer than this.
pub const FOCUS_SNAP_THRESHOLD: f32 = 0.01;

/// Orbit rotation per pixel of mouse drag, in radians.
pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// Pitch is clamped to stay clear of the poles.
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

/// Dolly factor per scroll line.
pub const ZOOM_SENSITIVITY: f32 = 0.1;

/// Pixel scroll deltas are scaled down to line units.
pub const PIXEL_SCROLL_SCALE: f32 = 0.05;

pub const MIN_ORBIT_DISTANCE: f32 = 0.05;
pub const MAX_ORBIT_DISTANCE: f32 = 50.0;

/// Camera position used before any landmarks have been framed.
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 1.5];
