use bevy::prelude::*;

use crate::engine::landmarks::store::{LandmarkStore, LoadStatus};
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Leave the loading state once the landmark fetch resolved, successfully or not.
pub fn transition_to_running(
    store: Res<LandmarkStore>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if store.status != LoadStatus::Loading {
        info!("→ Landmark load resolved ({}), transitioning to Running", store.status.describe());
        next_state.set(AppState::Running);
    }
}

pub fn announce_viewer_ready(store: Res<LandmarkStore>, mut rpc_interface: ResMut<WebRpcInterface>) {
    rpc_interface.send_notification(
        "viewer_ready",
        serde_json::json!({
            "landmark_count": store.len(),
            "status": store.status.describe(),
        }),
    );
}
