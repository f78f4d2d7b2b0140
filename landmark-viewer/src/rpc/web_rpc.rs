use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::engine::camera::orbit_controller::OrbitController;
use crate::engine::camera::pan::PanDirection;
use crate::engine::core::viewer_config::{ViewerConfig, ViewerVariant};
use crate::engine::landmarks::store::LandmarkStore;
use crate::engine::render::picking::LastClickedLandmark;
use crate::engine::systems::fps_tracking::current_fps;
use crate::tools::highlight::HighlightState;
use crate::tools::number_view::NumberView;
use crate::tools::viewer_commands::{CommandSource, ViewerCommands};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    #[cfg(test)]
    pub fn pending_responses(&self) -> &[RpcResponse] {
        &self.outgoing_responses
    }
}

/// Methods the viewer answers, with their decoded parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcCommand {
    SetHighlight { input: String },
    ResetView,
    ToggleNumberView,
    Pan(PanDirection),
    FocusLandmark(usize),
    ReloadLandmarks,
    GetViewerState,
    GetFps,
}

impl RpcCommand {
    pub fn parse(method: &str, params: &Value) -> Result<Self, RpcError> {
        match method {
            "set_highlight" => {
                #[derive(Deserialize)]
                struct SetHighlightParams {
                    input: String,
                }

                let parsed = serde_json::from_value::<SetHighlightParams>(params.clone())
                    .map_err(|_| RpcError::invalid_params("Expected 'input' string parameter"))?;
                Ok(Self::SetHighlight { input: parsed.input })
            }
            "reset_view" => Ok(Self::ResetView),
            "toggle_number_view" => Ok(Self::ToggleNumberView),
            "pan" => {
                #[derive(Deserialize)]
                struct PanParams {
                    direction: String,
                }

                let parsed = serde_json::from_value::<PanParams>(params.clone())
                    .map_err(|_| RpcError::invalid_params("Expected 'direction' parameter"))?;
                let direction = PanDirection::from_string(&parsed.direction).ok_or_else(|| {
                    RpcError::invalid_params(&format!("Unknown direction: {}", parsed.direction))
                })?;
                Ok(Self::Pan(direction))
            }
            "focus_landmark" => {
                #[derive(Deserialize)]
                struct FocusParams {
                    index: usize,
                }

                let parsed = serde_json::from_value::<FocusParams>(params.clone()).map_err(|_| {
                    RpcError::invalid_params("Expected non-negative integer 'index' parameter")
                })?;
                Ok(Self::FocusLandmark(parsed.index))
            }
            "reload_landmarks" => Ok(Self::ReloadLandmarks),
            "get_viewer_state" => Ok(Self::GetViewerState),
            "get_fps" => Ok(Self::GetFps),
            _ => Err(RpcError::method_not_found(method)),
        }
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Only string payloads that look like JSON-RPC are queued.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // The listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
pub(crate) struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Read-only viewer state used to answer query methods.
#[derive(bevy::ecs::system::SystemParam)]
pub struct ViewerSnapshot<'w, 's> {
    config: Res<'w, ViewerConfig>,
    store: Res<'w, LandmarkStore>,
    highlight: Res<'w, HighlightState>,
    number_view: Res<'w, NumberView>,
    last_clicked: Res<'w, LastClickedLandmark>,
    diagnostics: Res<'w, DiagnosticsStore>,
    cameras: Query<'w, 's, &'static OrbitController>,
}

impl ViewerSnapshot<'_, '_> {
    fn viewer_state(&self) -> Value {
        let centroid = self.store.view_centroid();
        let camera = self.cameras.single().ok().map(|controller| {
            json!({
                "position": controller.position.to_array(),
                "target": controller.target.to_array(),
            })
        });

        json!({
            "variant": match self.config.variant {
                ViewerVariant::IndexSet => "index_set",
                ViewerVariant::SingleIndex => "single_index",
            },
            "status": self.store.status.describe(),
            "landmark_count": self.store.len(),
            "centroid": centroid.to_array(),
            "radius": self.store.bounding_radius(),
            "highlight": self.highlight.indices(),
            "number_view": self.number_view.enabled,
            "last_clicked": self.last_clicked.0,
            "camera": camera,
        })
    }

    fn fps(&self) -> Value {
        json!({ "fps": current_fps(&self.diagnostics).unwrap_or(0.0) as f32 })
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut commands: ViewerCommands,
    snapshot: ViewerSnapshot,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(&request, &mut commands, &snapshot) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
            }
        }
    }
}

/// Run one request. Requests without an ID are executed as notifications and get no response.
fn handle_rpc_request(
    request: &RpcRequest,
    commands: &mut ViewerCommands,
    snapshot: &ViewerSnapshot,
) -> Option<RpcResponse> {
    let result = if request.jsonrpc != "2.0" {
        Err(RpcError::invalid_request("Expected jsonrpc \"2.0\""))
    } else {
        RpcCommand::parse(&request.method, &request.params)
            .and_then(|command| execute_command(command, commands, snapshot))
    };

    if let Err(error) = &result {
        warn!("RPC method '{}' failed: {}", request.method, error.message);
    }

    let id = request.id.clone()?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn execute_command(
    command: RpcCommand,
    commands: &mut ViewerCommands,
    snapshot: &ViewerSnapshot,
) -> Result<Value, RpcError> {
    let source = CommandSource::Rpc;

    match command {
        RpcCommand::SetHighlight { input } => {
            commands.set_highlight_input(input.clone(), source);
            Ok(json!({ "success": true, "input": input }))
        }
        RpcCommand::ResetView => {
            commands.reset_view(source);
            Ok(json!({ "success": true }))
        }
        RpcCommand::ToggleNumberView => {
            commands.toggle_number_view(source);
            // Applied later this frame, so report the state it will flip to.
            Ok(json!({ "success": true, "enabled": !snapshot.number_view.enabled }))
        }
        RpcCommand::Pan(direction) => {
            commands.pan(direction, source);
            Ok(json!({ "success": true, "direction": direction.as_str() }))
        }
        RpcCommand::FocusLandmark(index) => {
            let count = snapshot.store.len();
            if index >= count {
                return Err(RpcError::invalid_params(&format!(
                    "Landmark index {index} out of range (0..{count})"
                )));
            }
            commands.focus_landmark(index, source);
            Ok(json!({ "success": true, "index": index }))
        }
        RpcCommand::ReloadLandmarks => {
            commands.reload_landmarks(source);
            Ok(json!({ "success": true }))
        }
        RpcCommand::GetViewerState => Ok(snapshot.viewer_state()),
        RpcCommand::GetFps => Ok(snapshot.fps()),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Responses after notifications to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds have no host page.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::landmarks::test_support::sample_face;
    use crate::tools::viewer_commands::{FocusRequestEvent, PanRequestEvent, ViewerCommandsPlugin};

    #[test]
    fn parses_viewer_methods() {
        assert_eq!(
            RpcCommand::parse("set_highlight", &json!({ "input": "10, 130" })),
            Ok(RpcCommand::SetHighlight { input: "10, 130".into() })
        );
        assert_eq!(
            RpcCommand::parse("pan", &json!({ "direction": "Left" })),
            Ok(RpcCommand::Pan(PanDirection::Left))
        );
        assert_eq!(
            RpcCommand::parse("focus_landmark", &json!({ "index": 4 })),
            Ok(RpcCommand::FocusLandmark(4))
        );
        assert_eq!(RpcCommand::parse("reset_view", &Value::Null), Ok(RpcCommand::ResetView));
    }

    #[test]
    fn rejects_bad_params_and_unknown_methods() {
        let err = RpcCommand::parse("pan", &json!({ "direction": "forward" })).unwrap_err();
        assert_eq!(err.code, -32602);

        let err = RpcCommand::parse("focus_landmark", &json!({ "index": -1 })).unwrap_err();
        assert_eq!(err.code, -32602);

        let err = RpcCommand::parse("set_highlight", &json!({})).unwrap_err();
        assert_eq!(err.code, -32602);

        let err = RpcCommand::parse("teleport", &Value::Null).unwrap_err();
        assert_eq!(err.code, -32601);
    }

    fn rpc_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, ViewerCommandsPlugin))
            .init_resource::<WebRpcInterface>()
            .init_resource::<DiagnosticsStore>()
            .init_resource::<LandmarkStore>()
            .init_resource::<NumberView>()
            .init_resource::<LastClickedLandmark>()
            .insert_resource(ViewerConfig::index_set())
            .insert_resource(HighlightState::for_variant(ViewerVariant::IndexSet))
            .add_event::<IncomingRpcMessage>()
            .add_systems(Update, handle_rpc_messages);
        app
    }

    fn send(app: &mut App, content: &str) {
        app.world_mut().send_event(IncomingRpcMessage {
            content: content.to_string(),
        });
        app.update();
    }

    #[test]
    fn pan_request_dispatches_event_and_responds() {
        let mut app = rpc_app();
        send(
            &mut app,
            r#"{"jsonrpc":"2.0","method":"pan","params":{"direction":"up"},"id":7}"#,
        );

        let pans = app.world().resource::<Events<PanRequestEvent>>();
        let directions: Vec<_> = pans.iter_current_update_events().map(|e| e.direction).collect();
        assert_eq!(directions, vec![PanDirection::Up]);

        let responses = app.world().resource::<WebRpcInterface>().pending_responses();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].id, Some(json!(7)));
        assert!(responses[0].error.is_none());
    }

    #[test]
    fn notifications_without_id_get_no_response() {
        let mut app = rpc_app();
        send(&mut app, r#"{"jsonrpc":"2.0","method":"reset_view"}"#);

        assert!(app.world().resource::<WebRpcInterface>().pending_responses().is_empty());
    }

    #[test]
    fn focus_outside_loaded_range_is_an_error() {
        let mut app = rpc_app();
        app.world_mut().resource_mut::<LandmarkStore>().replace(sample_face());
        send(
            &mut app,
            r#"{"jsonrpc":"2.0","method":"focus_landmark","params":{"index":99},"id":"a"}"#,
        );

        assert!(app.world().resource::<Events<FocusRequestEvent>>().is_empty());
        let responses = app.world().resource::<WebRpcInterface>().pending_responses();
        assert_eq!(responses[0].error.as_ref().map(|e| e.code), Some(-32602));
    }

    #[test]
    fn viewer_state_reports_store_and_highlight() {
        let mut app = rpc_app();
        app.world_mut().resource_mut::<LandmarkStore>().replace(sample_face());
        app.world_mut()
            .resource_mut::<HighlightState>()
            .set_indices(vec![3, 1]);
        send(&mut app, r#"{"jsonrpc":"2.0","method":"get_viewer_state","id":1}"#);

        let responses = app.world().resource::<WebRpcInterface>().pending_responses();
        let state = responses[0].result.clone().unwrap_or_default();
        assert_eq!(state["landmark_count"], 13);
        assert_eq!(state["highlight"], json!([3, 1]));
        assert_eq!(state["variant"], "index_set");
        assert_eq!(state["camera"], Value::Null);
    }

    #[test]
    fn wrong_protocol_version_is_invalid_request() {
        let mut app = rpc_app();
        send(&mut app, r#"{"jsonrpc":"1.0","method":"get_fps","id":2}"#);

        let responses = app.world().resource::<WebRpcInterface>().pending_responses();
        assert_eq!(responses[0].error.as_ref().map(|e| e.code), Some(-32600));
    }
}
