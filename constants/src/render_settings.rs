use bevy::prelude::*;

pub const LANDMARK_SPHERE_RADIUS: f32 = 0.01;
pub const LANDMARK_SPHERE_SEGMENTS: u32 = 16;

pub const BASE_COLOUR: Color = Color::srgb(0.0, 0.0, 1.0);
pub const HIGHLIGHT_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const HIGHLIGHT_EMISSIVE: LinearRgba = LinearRgba::rgb(1.0, 0.0, 0.0);

/// Label anchors sit this far in front of and behind each sphere.
pub const LABEL_FACE_OFFSET: f32 = 0.01;
pub const LABEL_FONT_SIZE: f32 = 11.0;
pub const LABEL_COLOUR: Color = Color::srgb(0.08, 0.08, 0.1);

pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [0.0, 1.0, 2.0];

pub const CLEAR_COLOUR: Color = Color::srgb(0.95, 0.95, 0.95);
pub const STATUS_COLOUR: Color = Color::srgb(0.85, 0.1, 0.1);
