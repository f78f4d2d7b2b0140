//! Scene setup: viewer camera, lights and the native FPS overlay.

/// Startup systems spawning the camera rig, lighting and overlays.
pub mod setup;
