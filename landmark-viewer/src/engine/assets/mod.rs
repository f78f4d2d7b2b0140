//! Asset types loaded from JSON through the asset server.

/// Landmark payload as served by the static landmark file, with shape validation.
pub mod landmark_set;
