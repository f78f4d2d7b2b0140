//! Runtime diagnostics shared by both builds.
//!
//! Pushes frame rate updates to the host page over RPC and keeps the native
//! FPS overlay current.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC and updates native UI overlays.
pub mod fps_tracking;
