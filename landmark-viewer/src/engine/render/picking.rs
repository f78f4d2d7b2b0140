use bevy::prelude::*;

use super::point_cloud::LandmarkPoint;
use crate::engine::camera::orbit_controller::PointerCapture;
use crate::rpc::web_rpc::WebRpcInterface;

/// Index of the landmark most recently clicked, shown in the status line.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct LastClickedLandmark(pub Option<usize>);

pub fn record_click(
    index: usize,
    last_clicked: &mut LastClickedLandmark,
    rpc_interface: &mut WebRpcInterface,
) {
    last_clicked.0 = Some(index);
    rpc_interface.send_notification("landmark_clicked", serde_json::json!({ "index": index }));
    info!("Landmark {} clicked", index);
}

/// A press on a sphere belongs to the click, not to an orbit drag.
pub fn on_landmark_pressed(
    trigger: Trigger<Pointer<Pressed>>,
    points: Query<&LandmarkPoint>,
    mut capture: ResMut<PointerCapture>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    if points.contains(trigger.target()) {
        capture.consume();
    }
}

pub fn on_landmark_clicked(
    mut trigger: Trigger<Pointer<Click>>,
    points: Query<&LandmarkPoint>,
    mut last_clicked: ResMut<LastClickedLandmark>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let Ok(point) = points.get(trigger.target()) else {
        return;
    };

    trigger.propagate(false);
    record_click(point.index, &mut last_clicked, &mut rpc_interface);
}
