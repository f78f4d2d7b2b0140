//! Viewer engine: landmark loading and storage, camera control and point cloud rendering.

pub mod assets;
pub mod camera;
pub mod core;
pub mod landmarks;
pub mod loading;
pub mod render;
pub mod scene;
pub mod systems;
