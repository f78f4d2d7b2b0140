use bevy::prelude::*;
use constants::camera::INITIAL_CAMERA_POSITION;

use super::focus::FocusAnimator;
use super::orbit_controller::OrbitController;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::landmarks::store::LandmarkStore;

/// Distance at which a sphere of `radius` fits a vertical field of view of
/// `fov_degrees`, divided by `scale` (larger scale moves the camera closer).
pub fn default_distance(radius: f32, fov_degrees: f32, scale: f32) -> f32 {
    radius / (fov_degrees.to_radians() / 2.0).tan() / scale
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFraming {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraFraming {
    /// Look at `centroid` from straight in front, far enough back to fit `radius`.
    pub fn for_landmarks(centroid: Vec3, radius: f32, config: &ViewerConfig) -> Self {
        let distance = default_distance(radius, config.field_of_view_degrees, config.fit_scale);
        Self {
            position: centroid + Vec3::new(0.0, 0.0, distance),
            target: centroid,
        }
    }
}

impl Default for CameraFraming {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(INITIAL_CAMERA_POSITION),
            target: Vec3::ZERO,
        }
    }
}

/// Last framing applied to the camera. Reset returns here.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DefaultFraming(pub CameraFraming);

/// Framing waiting for the camera controller to exist. Removed once applied or
/// when the viewer shuts down, so the retry never outlives the camera.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PendingFraming {
    pub framing: CameraFraming,
    pub attempts: u32,
}

/// Queue a new default framing whenever the landmark sequence changes.
pub fn queue_framing_on_landmark_change(
    mut commands: Commands,
    store: Res<LandmarkStore>,
    config: Res<ViewerConfig>,
    mut last_generation: Local<Option<u32>>,
) {
    if *last_generation == Some(store.generation()) {
        return;
    }
    *last_generation = Some(store.generation());

    if store.is_empty() {
        return;
    }

    let framing =
        CameraFraming::for_landmarks(store.view_centroid(), store.bounding_radius(), &config);
    commands.insert_resource(PendingFraming {
        framing,
        attempts: 0,
    });
}

pub fn apply_pending_framing(
    mut commands: Commands,
    pending: Option<ResMut<PendingFraming>>,
    mut controllers: Query<(&mut OrbitController, &mut FocusAnimator)>,
    mut default_framing: ResMut<DefaultFraming>,
) {
    let Some(mut pending) = pending else {
        return;
    };

    let Ok((mut controller, mut animator)) = controllers.single_mut() else {
        pending.attempts += 1;
        debug!(
            "Camera controller not ready, retrying framing next frame (attempt {})",
            pending.attempts
        );
        return;
    };

    default_framing.0 = pending.framing;
    controller.snap_to(pending.framing);
    animator.cancel();
    commands.remove_resource::<PendingFraming>();

    info!(
        "Camera framed at {:?} looking at {:?}",
        pending.framing.position, pending.framing.target
    );
}

/// Drop a queued framing when the app exits or the camera goes away.
pub fn cancel_pending_framing(
    mut commands: Commands,
    pending: Option<Res<PendingFraming>>,
    mut exit_events: EventReader<AppExit>,
    mut removed_controllers: RemovedComponents<OrbitController>,
) {
    let exiting = exit_events.read().count() > 0;
    let camera_removed = removed_controllers.read().count() > 0;

    if pending.is_some() && (exiting || camera_removed) {
        debug!("Cancelling pending camera framing");
        commands.remove_resource::<PendingFraming>();
    }
}
