//! Viewer camera control for the landmark scene.
//!
//! Provides orbit camera controls around a target, default framing derived from the
//! landmark geometry, discrete panning, reset and a smoothed focus animation.

/// Default camera pose derived from centroid, bounding radius and field of view.
pub mod framing;

/// Per-frame focus animation toward a landmark.
pub mod focus;

/// Orbit controller component, mouse input and camera transform sync.
pub mod orbit_controller;

/// Discrete panning from buttons, RPC and arrow keys.
pub mod pan;

/// Snap back to the default framing.
pub mod reset;
