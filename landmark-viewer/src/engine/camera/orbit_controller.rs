use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera::{
    MAX_ORBIT_DISTANCE, MIN_ORBIT_DISTANCE, ORBIT_PITCH_LIMIT, ORBIT_SENSITIVITY,
    PIXEL_SCROLL_SCALE, ZOOM_SENSITIVITY,
};

use super::framing::CameraFraming;

/// Orbit-style camera control attached to the viewer camera. Holds the camera
/// position and the orbit target; `sync_camera_transform` writes them to the
/// camera `Transform` each frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitController {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for OrbitController {
    fn default() -> Self {
        let framing = CameraFraming::default();
        Self {
            position: framing.position,
            target: framing.target,
        }
    }
}

impl OrbitController {
    pub fn snap_to(&mut self, framing: CameraFraming) {
        self.position = framing.position;
        self.target = framing.target;
    }

    /// Vector from the target to the camera.
    pub fn offset(&self) -> Vec3 {
        self.position - self.target
    }

    /// Move camera and target together, keeping orientation and zoom.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Rotate the camera around the target by yaw (around +Y) and pitch.
    pub fn orbit(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let offset = self.offset();
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let yaw = offset.x.atan2(offset.z) + yaw_delta;
        let pitch = ((offset.y / distance).clamp(-1.0, 1.0).asin() + pitch_delta)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);

        let rotated = Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        ) * distance;
        self.position = self.target + rotated;
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, amount: f32) {
        let offset = self.offset();
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let new_distance =
            (distance * (1.0 - amount * ZOOM_SENSITIVITY)).clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
        self.position = self.target + offset / distance * new_distance;
    }

    /// Drag-pan in the camera plane, scaled by distance so the cloud tracks the cursor.
    pub fn drag_pan(&mut self, screen_delta: Vec2) {
        let offset = self.offset();
        let forward = -offset.normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        let scale = offset.length() * ORBIT_SENSITIVITY * 0.5;
        self.translate((-right * screen_delta.x + up * screen_delta.y) * scale);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.target, Vec3::Y)
    }
}

/// Marks a primary press that a landmark already handled, so it does not also
/// start an orbit drag. Set from the picking observer, released with the button.
#[derive(Resource, Debug, Default)]
pub struct PointerCapture {
    consumed: bool,
}

impl PointerCapture {
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn release(&mut self) {
        self.consumed = false;
    }
}

pub fn orbit_camera_input(
    mut controllers: Query<&mut OrbitController>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut capture: ResMut<PointerCapture>,
    ui_buttons: Query<&Interaction>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * PIXEL_SCROLL_SCALE,
        })
        .sum();

    let Ok(mut controller) = controllers.single_mut() else {
        return;
    };

    let over_ui = ui_buttons.iter().any(|i| *i != Interaction::None);

    if mouse_button.pressed(MouseButton::Left)
        && !capture.is_consumed()
        && !over_ui
        && mouse_delta != Vec2::ZERO
    {
        controller.orbit(
            -mouse_delta.x * ORBIT_SENSITIVITY,
            mouse_delta.y * ORBIT_SENSITIVITY,
        );
    }

    if mouse_button.pressed(MouseButton::Right) && !over_ui && mouse_delta != Vec2::ZERO {
        controller.drag_pan(mouse_delta);
    }

    if scroll.abs() > f32::EPSILON && !over_ui {
        controller.zoom(scroll);
    }

    if mouse_button.just_released(MouseButton::Left) {
        capture.release();
    }
}

pub fn sync_camera_transform(
    mut cameras: Query<(&OrbitController, &mut Transform), Changed<OrbitController>>,
) {
    for (controller, mut transform) in &mut cameras {
        *transform = controller.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controller() -> OrbitController {
        OrbitController {
            position: Vec3::new(0.5, -0.1, 2.0),
            target: Vec3::new(0.5, -0.1, 0.0),
        }
    }

    #[test]
    fn translate_keeps_offset() {
        let mut c = controller();
        let before = c.offset();
        c.translate(Vec3::new(0.1, -0.1, 0.0));
        assert_eq!(c.target, Vec3::new(0.6, -0.2, 0.0));
        assert_relative_eq!(c.offset().distance(before), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn orbit_preserves_distance_to_target() {
        let mut c = controller();
        c.orbit(0.7, 0.3);
        assert_relative_eq!(c.offset().length(), 2.0, epsilon = 1e-5);
        assert_eq!(c.target, Vec3::new(0.5, -0.1, 0.0));
    }

    #[test]
    fn orbit_pitch_is_clamped() {
        let mut c = controller();
        c.orbit(0.0, 10.0);
        let pitch = (c.offset().y / c.offset().length()).asin();
        assert!(pitch <= ORBIT_PITCH_LIMIT + 1e-4);
    }

    #[test]
    fn zoom_moves_along_view_axis_within_limits() {
        let mut c = controller();
        c.zoom(1.0);
        assert_relative_eq!(c.offset().length(), 1.8, epsilon = 1e-5);
        assert_relative_eq!(c.offset().normalize().z, 1.0, epsilon = 1e-6);

        c.zoom(1_000.0);
        assert_relative_eq!(c.offset().length(), MIN_ORBIT_DISTANCE, epsilon = 1e-6);
    }

    #[test]
    fn drag_pan_moves_target_with_camera() {
        let mut c = controller();
        let before = c.offset();
        c.drag_pan(Vec2::new(10.0, 0.0));
        assert!(c.target.x < 0.5);
        assert_relative_eq!(c.offset().distance(before), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn captured_press_does_not_orbit() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<PointerCapture>()
            .add_event::<MouseMotion>()
            .add_event::<MouseWheel>()
            .add_systems(Update, orbit_camera_input);

        let camera = app.world_mut().spawn(controller()).id();
        app.world_mut().resource_mut::<PointerCapture>().consume();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(40.0, 0.0),
        });
        app.update();

        assert_eq!(*app.world().get::<OrbitController>(camera).unwrap(), controller());

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        app.update();
        assert!(!app.world().resource::<PointerCapture>().is_consumed());

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(40.0, 0.0),
        });
        app.update();
        assert_ne!(*app.world().get::<OrbitController>(camera).unwrap(), controller());
    }
}
