//! Shared viewer configuration.
//!
//! Compile-time settings for camera framing, landmark loading, rendering and the
//! display coordinate system. The viewer copies these into its runtime config.

/// Camera framing, pan and focus animation settings.
pub mod camera;

/// Display reflection between landmark source space and view space.
pub mod coordinate_system;

/// Landmark asset location, load-time offset and empty-set fallbacks.
pub mod landmarks;

/// Sphere, label, colour and lighting settings.
pub mod render_settings;
