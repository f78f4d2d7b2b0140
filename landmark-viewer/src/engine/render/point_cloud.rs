use bevy::prelude::*;
use constants::coordinate_system::DISPLAY_SCALE;
use constants::render_settings::{
    BASE_COLOUR, HIGHLIGHT_COLOUR, HIGHLIGHT_EMISSIVE, LANDMARK_SPHERE_RADIUS,
    LANDMARK_SPHERE_SEGMENTS,
};

use crate::engine::landmarks::store::LandmarkStore;
use crate::tools::highlight::HighlightState;

/// Root of the rendered cloud. Carries the display reflection so children keep
/// their source-space coordinates.
#[derive(Component)]
pub struct LandmarkCloud;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkPoint {
    pub index: usize,
}

/// Mesh and materials shared by every landmark sphere.
#[derive(Resource, Clone)]
pub struct LandmarkRenderAssets {
    pub sphere: Handle<Mesh>,
    pub base: Handle<StandardMaterial>,
    pub highlight: Handle<StandardMaterial>,
}

impl LandmarkRenderAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        let sphere = meshes.add(
            Sphere::new(LANDMARK_SPHERE_RADIUS)
                .mesh()
                .uv(LANDMARK_SPHERE_SEGMENTS, LANDMARK_SPHERE_SEGMENTS),
        );

        // The reflected root flips winding, so both sides are drawn.
        let base = materials.add(StandardMaterial {
            base_color: BASE_COLOUR,
            emissive: LinearRgba::BLACK,
            cull_mode: None,
            ..default()
        });
        let highlight = materials.add(StandardMaterial {
            base_color: HIGHLIGHT_COLOUR,
            emissive: HIGHLIGHT_EMISSIVE,
            cull_mode: None,
            ..default()
        });

        Self { sphere, base, highlight }
    }

    pub fn material_for(&self, index: usize, highlight: &HighlightState) -> Handle<StandardMaterial> {
        if highlight.contains(index) {
            self.highlight.clone()
        } else {
            self.base.clone()
        }
    }
}

pub fn setup_landmark_cloud(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(LandmarkRenderAssets::new(&mut meshes, &mut materials));
    commands.spawn((
        LandmarkCloud,
        Name::new("LandmarkCloud"),
        Transform::from_scale(DISPLAY_SCALE),
        Visibility::default(),
    ));
}

/// Respawn one sphere per landmark whenever the store holds a new sequence.
pub fn sync_landmark_cloud(
    mut commands: Commands,
    store: Res<LandmarkStore>,
    highlight: Res<HighlightState>,
    render_assets: Option<Res<LandmarkRenderAssets>>,
    clouds: Query<Entity, With<LandmarkCloud>>,
    existing: Query<Entity, With<LandmarkPoint>>,
    mut spawned_generation: Local<Option<u32>>,
) {
    if *spawned_generation == Some(store.generation()) {
        return;
    }
    let (Some(render_assets), Ok(cloud)) = (render_assets, clouds.single()) else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    commands.entity(cloud).with_children(|parent| {
        for (index, point) in store.points().iter().enumerate() {
            parent.spawn((
                LandmarkPoint { index },
                Mesh3d(render_assets.sphere.clone()),
                MeshMaterial3d(render_assets.material_for(index, &highlight)),
                Transform::from_translation(*point),
            ));
        }
    });

    debug!(
        "Spawned {} landmark spheres (generation {})",
        store.len(),
        store.generation()
    );
    *spawned_generation = Some(store.generation());
}

pub fn update_highlight_materials(
    highlight: Res<HighlightState>,
    render_assets: Option<Res<LandmarkRenderAssets>>,
    mut points: Query<(&LandmarkPoint, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if !highlight.is_changed() {
        return;
    }
    let Some(render_assets) = render_assets else {
        return;
    };

    for (point, mut material) in &mut points {
        let wanted = render_assets.material_for(point.index, &highlight);
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}
