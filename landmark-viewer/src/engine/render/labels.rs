use bevy::picking::Pickable;
use bevy::prelude::*;
use constants::coordinate_system::to_view_space;
use constants::render_settings::{LABEL_COLOUR, LABEL_FACE_OFFSET, LABEL_FONT_SIZE};

use crate::engine::camera::orbit_controller::OrbitController;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::landmarks::store::LandmarkStore;
use crate::tools::highlight::HighlightState;
use crate::tools::number_view::NumberView;

/// Side of the sphere a label sits on. Exactly one of the pair faces the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFace {
    Front,
    Back,
}

impl LabelFace {
    pub const BOTH: [LabelFace; 2] = [Self::Front, Self::Back];

    /// Anchor offset in cloud (source) space. Front sits on local -Z, which the
    /// display reflection turns toward the default camera.
    pub fn local_offset(&self) -> Vec3 {
        match self {
            Self::Front => Vec3::new(0.0, 0.0, -LABEL_FACE_OFFSET),
            Self::Back => Vec3::new(0.0, 0.0, LABEL_FACE_OFFSET),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkLabel {
    pub index: usize,
    pub face: LabelFace,
}

/// Landmarks that carry labels: the highlighted ones in the index-set viewer,
/// every landmark while number view is on in the single-index viewer.
pub fn label_indices(
    highlight: &HighlightState,
    number_view: &NumberView,
    config: &ViewerConfig,
    landmark_count: usize,
) -> Vec<usize> {
    let mut indices = if config.labels_follow_highlight() {
        highlight.indices()
    } else if number_view.enabled {
        (0..landmark_count).collect()
    } else {
        Vec::new()
    };

    indices.retain(|index| *index < landmark_count);
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// True when the label's face normal points toward the camera.
pub fn label_faces_camera(anchor: Vec3, sphere_center: Vec3, camera_position: Vec3) -> bool {
    (anchor - sphere_center).dot(camera_position - anchor) > 0.0
}

pub fn sync_labels(
    mut commands: Commands,
    store: Res<LandmarkStore>,
    highlight: Res<HighlightState>,
    number_view: Res<NumberView>,
    config: Res<ViewerConfig>,
    existing: Query<Entity, With<LandmarkLabel>>,
) {
    if !(store.is_changed() || highlight.is_changed() || number_view.is_changed()) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for index in label_indices(&highlight, &number_view, &config, store.len()) {
        for face in LabelFace::BOTH {
            commands.spawn((
                LandmarkLabel { index, face },
                Text::new(index.to_string()),
                TextFont { font_size: LABEL_FONT_SIZE, ..default() },
                TextColor(LABEL_COLOUR),
                Node {
                    position_type: PositionType::Absolute,
                    ..default()
                },
                Visibility::Hidden,
                Pickable::IGNORE,
            ));
        }
    }
}

/// Project every label anchor into the viewport and show only camera-facing faces.
pub fn position_labels(
    store: Res<LandmarkStore>,
    cameras: Query<(&Camera, &OrbitController)>,
    mut labels: Query<(&LandmarkLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, controller)) = cameras.single() else {
        return;
    };
    let camera_transform = GlobalTransform::from(controller.transform());

    for (label, mut node, mut visibility) in &mut labels {
        let Some(center) = store.view_position(label.index) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        let anchor = center + to_view_space(label.face.local_offset());

        let projected = label_faces_camera(anchor, center, controller.position)
            .then(|| camera.world_to_viewport(&camera_transform, anchor).ok())
            .flatten();

        match projected {
            Some(screen) => {
                let digits = label.index.to_string().len() as f32;
                node.left = Val::Px(screen.x - digits * LABEL_FONT_SIZE * 0.3);
                node.top = Val::Px(screen.y - LABEL_FONT_SIZE * 0.6);
                visibility.set_if_neq(Visibility::Visible);
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::viewer_config::ViewerVariant;
    use crate::engine::landmarks::test_support::sample_face;

    #[test]
    fn index_set_labels_follow_highlight() {
        let config = ViewerConfig::index_set();
        let mut highlight = HighlightState::for_variant(ViewerVariant::IndexSet);
        highlight.apply_input("7, 2, 2, 999");

        let indices = label_indices(&highlight, &NumberView::default(), &config, 468);
        assert_eq!(indices, vec![2, 7]);
    }

    #[test]
    fn single_index_labels_only_in_number_view() {
        let config = ViewerConfig::single_index();
        let highlight = HighlightState::Single(Some(3));

        assert!(label_indices(&highlight, &NumberView::default(), &config, 10).is_empty());

        let on = NumberView { enabled: true };
        assert_eq!(label_indices(&highlight, &on, &config, 10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn exactly_one_face_points_at_the_camera() {
        let center = Vec3::new(0.1, -0.2, 0.05);
        for camera in [Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.3, 0.1, -2.0)] {
            let visible = LabelFace::BOTH
                .iter()
                .filter(|face| {
                    let anchor = center + to_view_space(face.local_offset());
                    label_faces_camera(anchor, center, camera)
                })
                .count();
            assert_eq!(visible, 1);
        }
    }

    #[test]
    fn front_face_is_visible_from_default_camera() {
        let center = Vec3::ZERO;
        let anchor = center + to_view_space(LabelFace::Front.local_offset());
        assert!(label_faces_camera(anchor, center, Vec3::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn spawns_label_pair_per_highlighted_point() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<LandmarkStore>()
            .init_resource::<NumberView>()
            .insert_resource(ViewerConfig::index_set())
            .insert_resource(HighlightState::for_variant(ViewerVariant::IndexSet))
            .add_systems(Update, sync_labels);

        app.world_mut().resource_mut::<LandmarkStore>().replace(sample_face());
        app.world_mut()
            .resource_mut::<HighlightState>()
            .set_indices(vec![1, 4]);
        app.update();

        let mut query = app.world_mut().query::<&LandmarkLabel>();
        let mut labels: Vec<_> = query.iter(app.world()).copied().collect();
        labels.sort_by_key(|label| (label.index, label.face == LabelFace::Back));
        assert_eq!(
            labels,
            vec![
                LandmarkLabel { index: 1, face: LabelFace::Front },
                LandmarkLabel { index: 1, face: LabelFace::Back },
                LandmarkLabel { index: 4, face: LabelFace::Front },
                LandmarkLabel { index: 4, face: LabelFace::Back },
            ]
        );

        app.world_mut().resource_mut::<HighlightState>().clear();
        app.update();
        assert_eq!(query.iter(app.world()).count(), 0);
    }
}
