//! Landmark cloud rendering: one sphere per landmark under a reflected root,
//! highlight materials, screen-space index labels and click picking.
//!
//! ## Entity Layout
//!
//! ```text
//! LandmarkCloud (Transform scale (1, -1, -1))
//!   └─> LandmarkPoint { index } × N   shared sphere mesh, base or highlight material
//!
//! LandmarkLabel { index, face } × 2 per labelled point   UI text, projected each frame
//! ```
//!
//! Spheres are rebuilt whenever the store generation changes; highlight changes
//! only swap material handles.

/// Dual front/back numeric labels and their per-frame projection.
pub mod labels;

/// Click and press observers on landmark spheres.
pub mod picking;

/// Cloud root, sphere spawning and highlight materials.
pub mod point_cloud;
