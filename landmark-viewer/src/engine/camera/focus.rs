use bevy::prelude::*;

use super::orbit_controller::OrbitController;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::landmarks::store::LandmarkStore;
use crate::tools::viewer_commands::FocusRequestEvent;

/// Smoothed camera move toward a point of interest, ticked once per frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub enum FocusAnimator {
    #[default]
    Idle,
    Animating { position: Vec3, target: Vec3 },
}

impl FocusAnimator {
    /// Aim at `point`, keeping the camera's current offset from its target.
    /// Overwrites any animation already in flight.
    pub fn start(&mut self, controller: &OrbitController, point: Vec3) {
        *self = Self::Animating {
            position: point + controller.offset(),
            target: point,
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Advance one frame. Returns true while still animating.
    pub fn tick(&mut self, controller: &mut OrbitController, factor: f32, threshold: f32) -> bool {
        let Self::Animating { position, target } = *self else {
            return false;
        };

        controller.position = controller.position.lerp(position, factor);
        controller.target = controller.target.lerp(target, factor);

        if controller.position.distance(position) < threshold
            && controller.target.distance(target) < threshold
        {
            controller.position = position;
            controller.target = target;
            *self = Self::Idle;
            return false;
        }

        true
    }
}

pub fn handle_focus_requests(
    mut events: EventReader<FocusRequestEvent>,
    store: Res<LandmarkStore>,
    mut cameras: Query<(&OrbitController, &mut FocusAnimator)>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    let Some(point) = store.view_position(event.index) else {
        warn!("Cannot focus landmark {}: only {} loaded", event.index, store.len());
        return;
    };

    if let Ok((controller, mut animator)) = cameras.single_mut() {
        animator.start(controller, point);
        debug!("Focusing landmark {} via {:?}", event.index, event.source);
    }
}

pub fn tick_focus_animation(
    mut cameras: Query<(&mut OrbitController, &mut FocusAnimator)>,
    config: Res<ViewerConfig>,
) {
    for (mut controller, mut animator) in &mut cameras {
        if animator.is_animating() {
            animator.tick(
                &mut controller,
                config.focus_lerp_factor,
                config.focus_snap_threshold,
            );
        }
    }
}
