//! Landmark file loading.
//!
//! Requests the landmark JSON through the asset server, validates and shifts the
//! payload into the landmark store, and handles explicit reload requests.

/// Landmark asset request, arrival handling and reload.
pub mod landmark_loader;
