use bevy::prelude::*;

use super::focus::FocusAnimator;
use super::framing::DefaultFraming;
use super::orbit_controller::OrbitController;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::landmarks::store::LandmarkStore;
use crate::tools::highlight::HighlightState;
use crate::tools::viewer_commands::ResetViewEvent;

/// Snap the camera back to the last default framing, immediately.
pub fn handle_reset_view(
    mut events: EventReader<ResetViewEvent>,
    store: Res<LandmarkStore>,
    default_framing: Res<DefaultFraming>,
    config: Res<ViewerConfig>,
    mut highlight: ResMut<HighlightState>,
    mut cameras: Query<(&mut OrbitController, &mut FocusAnimator)>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    if let Ok((mut controller, mut animator)) = cameras.single_mut() {
        animator.cancel();
        controller.position = default_framing.0.position;
        controller.target = store.view_centroid();
        info!("Camera view reset via {:?}", event.source);
    }

    if config.clear_highlight_on_reset() {
        highlight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::landmarks::test_support::sample_face;
    use crate::engine::camera::framing::{
        CameraFraming, apply_pending_framing, queue_framing_on_landmark_change,
    };
    use crate::engine::camera::pan::{PanDirection, apply_pan_requests};
    use crate::tools::viewer_commands::{CommandSource, PanRequestEvent};

    fn reset_app(config: ViewerConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<LandmarkStore>()
            .init_resource::<DefaultFraming>()
            .insert_resource(HighlightState::for_variant(config.variant))
            .insert_resource(config)
            .add_event::<ResetViewEvent>()
            .add_event::<PanRequestEvent>()
            .add_systems(
                Update,
                (
                    queue_framing_on_landmark_change,
                    apply_pending_framing,
                    apply_pan_requests,
                    handle_reset_view,
                )
                    .chain(),
            );
        app.world_mut()
            .spawn((OrbitController::default(), FocusAnimator::default()));
        app.world_mut()
            .resource_mut::<LandmarkStore>()
            .replace(sample_face());
        app.update();
        app
    }

    fn controller(app: &mut App) -> OrbitController {
        *app.world_mut()
            .query::<&OrbitController>()
            .single(app.world())
            .unwrap()
    }

    #[test]
    fn reset_restores_default_after_pans() {
        let mut app = reset_app(ViewerConfig::index_set());
        let framed = controller(&mut app);
        let store = app.world().resource::<LandmarkStore>().clone();
        let expected = CameraFraming::for_landmarks(
            store.view_centroid(),
            store.bounding_radius(),
            &ViewerConfig::index_set(),
        );
        assert_eq!(framed.position, expected.position);

        for direction in [PanDirection::Up, PanDirection::Left, PanDirection::Left] {
            app.world_mut().send_event(PanRequestEvent {
                direction,
                source: CommandSource::Ui,
            });
            app.update();
        }
        assert_ne!(controller(&mut app), framed);

        app.world_mut().send_event(ResetViewEvent {
            source: CommandSource::Ui,
        });
        app.update();

        let reset = controller(&mut app);
        assert_eq!(reset.position, expected.position);
        assert_eq!(reset.target, store.view_centroid());
    }

    #[test]
    fn reset_after_failed_reload_targets_empty_centroid() {
        let mut app = reset_app(ViewerConfig::index_set());
        let framed = controller(&mut app);
        assert_ne!(framed.target, Vec3::ZERO);

        app.world_mut()
            .resource_mut::<LandmarkStore>()
            .fail("404 Not Found");
        app.update();

        app.world_mut().send_event(ResetViewEvent {
            source: CommandSource::Keyboard,
        });
        app.update();

        let reset = controller(&mut app);
        assert_eq!(reset.target, Vec3::ZERO);
        assert_eq!(reset.position, framed.position);
    }

    #[test]
    fn single_index_reset_clears_highlight() {
        let mut app = reset_app(ViewerConfig::single_index());
        app.world_mut()
            .resource_mut::<HighlightState>()
            .set_indices(vec![12]);

        app.world_mut().send_event(ResetViewEvent {
            source: CommandSource::Keyboard,
        });
        app.update();

        assert!(app.world().resource::<HighlightState>().indices().is_empty());
    }

    #[test]
    fn index_set_reset_keeps_highlight() {
        let mut app = reset_app(ViewerConfig::index_set());
        app.world_mut()
            .resource_mut::<HighlightState>()
            .set_indices(vec![1, 2]);

        app.world_mut().send_event(ResetViewEvent {
            source: CommandSource::Rpc,
        });
        app.update();

        assert_eq!(app.world().resource::<HighlightState>().indices(), vec![1, 2]);
    }
}
