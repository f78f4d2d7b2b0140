use bevy::prelude::*;
use constants::camera::FIELD_OF_VIEW_DEGREES;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
};

use crate::engine::camera::focus::FocusAnimator;
use crate::engine::camera::orbit_controller::OrbitController;
use crate::engine::core::app_state::FpsText;

/// Perspective camera driven by the orbit controller. Starts at the initial pose
/// until the landmark framing is applied.
pub fn spawn_viewer_camera(mut commands: Commands) {
    let controller = OrbitController::default();

    commands.spawn((
        Name::new("ViewerCamera"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: 0.01,
            far: 100.0,
            ..default()
        }),
        controller.transform(),
        controller,
        FocusAnimator::default(),
    ));
}

pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(DIRECTIONAL_LIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn spawn_fps_overlay(mut commands: Commands) {
    commands.spawn((
        FpsText,
        Name::new("FpsOverlay"),
        Text::new("FPS: --"),
        TextFont { font_size: 14.0, ..default() },
        TextColor(Color::srgb(0.3, 0.3, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(8.0),
            ..default()
        },
    ));
}
