//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, viewer variant selection
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with picking, JSON landmark loading, camera control,
/// point cloud rendering and platform-specific input surfaces.
pub mod app_setup;

/// Application state machine for the loading to running transition.
pub mod app_state;

/// Viewer variant and runtime copy of the shared constants.
pub mod viewer_config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
