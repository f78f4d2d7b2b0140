use bevy::asset::{AssetLoadFailedEvent, LoadState};
use bevy::prelude::*;

use crate::engine::assets::landmark_set::{LandmarkError, LandmarkSet};
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::landmarks::store::{LandmarkStore, LoadStatus};
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::viewer_commands::ReloadLandmarksEvent;

#[derive(Resource, Default)]
pub struct LandmarkLoader {
    handle: Option<Handle<LandmarkSet>>,
}

// Start the one-shot landmark request
pub fn start_loading(
    mut loader: ResMut<LandmarkLoader>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    info!("Loading landmarks from: {}", config.landmark_path);
    loader.handle = Some(asset_server.load(config.landmark_path.clone()));
}

/// Validate a landmark payload and publish it. On error the store is emptied and
/// marked failed so the viewer shows an empty scene with a visible reason.
pub fn apply_landmark_set(
    set: &LandmarkSet,
    config: &ViewerConfig,
    store: &mut LandmarkStore,
) -> Result<usize, LandmarkError> {
    if let Err(error) = set.validate(config.expected_count) {
        store.fail(error.to_string());
        return Err(error);
    }

    store.replace(set.shifted_points(config.vertical_offset));
    Ok(store.len())
}

/// Publish the landmark payload once its asset arrives, or record the failure.
/// Failures come from `AssetLoadFailedEvent`, so each fetch reports at most once
/// and a retry in flight never re-reads the previous attempt's state.
pub fn receive_landmarks(
    mut events: EventReader<AssetEvent<LandmarkSet>>,
    mut failures: EventReader<AssetLoadFailedEvent<LandmarkSet>>,
    loader: Res<LandmarkLoader>,
    landmark_sets: Res<Assets<LandmarkSet>>,
    config: Res<ViewerConfig>,
    mut store: ResMut<LandmarkStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(handle) = loader.handle.as_ref() else {
        events.clear();
        failures.clear();
        return;
    };

    let mut arrived = false;
    for event in events.read() {
        match event {
            AssetEvent::LoadedWithDependencies { id } | AssetEvent::Modified { id }
                if *id == handle.id() =>
            {
                arrived = true;
            }
            _ => {}
        }
    }

    let load_error = failures
        .read()
        .filter(|failure| failure.id == handle.id())
        .last()
        .map(|failure| LandmarkError::Load(failure.error.to_string()));

    if arrived {
        let Some(set) = landmark_sets.get(handle) else {
            return;
        };

        match apply_landmark_set(set, &config, &mut store) {
            Ok(count) => {
                info!(
                    "✓ {} landmarks loaded, centroid {:?}, radius {:.4}",
                    count,
                    store.centroid(),
                    store.bounding_radius()
                );
                let centroid = store.centroid();
                rpc_interface.send_notification(
                    "landmarks_loaded",
                    serde_json::json!({
                        "count": count,
                        "centroid": [centroid.x, centroid.y, centroid.z],
                        "radius": store.bounding_radius(),
                    }),
                );
            }
            Err(error) => report_failure(&error, &mut rpc_interface),
        }
        return;
    }

    if let Some(error) = load_error {
        store.fail(error.to_string());
        report_failure(&error, &mut rpc_interface);
    }
}

fn report_failure(error: &LandmarkError, rpc_interface: &mut WebRpcInterface) {
    error!("Landmark load failed: {}", error);
    rpc_interface.send_notification(
        "landmarks_failed",
        serde_json::json!({ "message": error.to_string() }),
    );
}

/// Re-fetch the landmark file. The store keeps its current points until the new
/// payload arrives or fails. A failed handle is requested again, which puts it
/// back into `Loading` straight away; a loaded one goes through `reload`.
pub fn handle_reload_requests(
    mut events: EventReader<ReloadLandmarksEvent>,
    mut loader: ResMut<LandmarkLoader>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut store: ResMut<LandmarkStore>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    info!("Reloading landmarks via {:?}", event.source);
    store.status = LoadStatus::Loading;

    let loaded = loader
        .handle
        .as_ref()
        .and_then(|handle| asset_server.get_load_state(handle.id()))
        .is_some_and(|state| matches!(state, LoadState::Loaded));

    if loaded {
        asset_server.reload(config.landmark_path.clone());
    } else {
        loader.handle = Some(asset_server.load(config.landmark_path.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::landmark_set::Landmark;
    use crate::tools::viewer_commands::CommandSource;
    use bevy_common_assets::json::JsonAssetPlugin;

    fn face_like_set(count: usize) -> LandmarkSet {
        LandmarkSet {
            points: (0..count)
                .map(|i| {
                    let t = i as f32 / count as f32;
                    Landmark {
                        x: 0.3 + 0.4 * t,
                        y: 0.2 + 0.6 * (1.0 - t),
                        z: -0.05 + 0.1 * t,
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn applies_offset_before_computing_geometry() {
        let config = ViewerConfig::index_set();
        let mut store = LandmarkStore::default();
        let set = face_like_set(468);

        let count = apply_landmark_set(&set, &config, &mut store).unwrap();

        assert_eq!(count, 468);
        assert_eq!(store.status, LoadStatus::Loaded(468));
        let raw_mean_y = set.points.iter().map(|p| p.y).sum::<f32>() / 468.0;
        assert!((store.centroid().y - (raw_mean_y - 0.6)).abs() < 1e-4);
    }

    #[test]
    fn invalid_payload_leaves_store_empty_and_failed() {
        let config = ViewerConfig {
            expected_count: Some(468),
            ..ViewerConfig::index_set()
        };
        let mut store = LandmarkStore::default();
        store.replace(vec![Vec3::ONE]);

        let result = apply_landmark_set(&face_like_set(10), &config, &mut store);

        assert_eq!(
            result,
            Err(LandmarkError::UnexpectedCount { expected: 468, found: 10 })
        );
        assert!(store.is_empty());
        assert!(matches!(store.status, LoadStatus::Failed(_)));
        assert_eq!(store.bounding_radius(), 1.0);
    }

    fn loader_app(landmark_path: &str) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .add_plugins(JsonAssetPlugin::<LandmarkSet>::new(&["json"]))
            .init_resource::<LandmarkLoader>()
            .init_resource::<LandmarkStore>()
            .init_resource::<WebRpcInterface>()
            .insert_resource(ViewerConfig {
                landmark_path: landmark_path.to_string(),
                ..ViewerConfig::index_set()
            })
            .add_event::<ReloadLandmarksEvent>()
            .add_systems(Startup, start_loading)
            .add_systems(Update, (handle_reload_requests, receive_landmarks).chain());
        app
    }

    fn notifications(app: &App, method: &str) -> usize {
        app.world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .filter(|notification| notification.method == method)
            .count()
    }

    fn update_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
        for _ in 0..500 {
            app.update();
            if done(app) {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        panic!("landmark load did not settle");
    }

    #[test]
    fn loads_bundled_fixture_through_asset_server() {
        let mut app = loader_app("landmarks.json");
        update_until(&mut app, |app| {
            matches!(app.world().resource::<LandmarkStore>().status, LoadStatus::Loaded(_))
        });

        assert_eq!(app.world().resource::<LandmarkStore>().len(), 468);
        assert_eq!(notifications(&app, "landmarks_loaded"), 1);
        assert_eq!(notifications(&app, "landmarks_failed"), 0);
    }

    #[test]
    fn missing_file_fails_once_and_retry_starts_clean() {
        let mut app = loader_app("no_such_landmarks.json");
        update_until(&mut app, |app| {
            matches!(app.world().resource::<LandmarkStore>().status, LoadStatus::Failed(_))
        });
        assert!(app.world().resource::<LandmarkStore>().is_empty());
        assert_eq!(notifications(&app, "landmarks_failed"), 1);

        app.world_mut().send_event(ReloadLandmarksEvent {
            source: CommandSource::Keyboard,
        });
        app.update();

        assert_eq!(app.world().resource::<LandmarkStore>().status, LoadStatus::Loading);
        assert_eq!(notifications(&app, "landmarks_failed"), 1);

        update_until(&mut app, |app| notifications(app, "landmarks_failed") == 2);
        assert!(matches!(
            app.world().resource::<LandmarkStore>().status,
            LoadStatus::Failed(_)
        ));
    }
}
