//! JSON-RPC 2.0 communication layer for the host page.
//!
//! The web build runs inside an iframe; the surrounding page renders the form
//! inputs and drives the viewer through `postMessage`. Native builds compile the
//! same layer with a no-op transport so every system can push notifications
//! unconditionally.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ RpcCommand::parse
//!        │                                        ├─ ViewerCommands event
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! Requests without an ID are executed but never answered.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request (wrong `jsonrpc` version)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//!
//! ## Methods
//!
//! ### Viewer Control
//! - `set_highlight {input}`: Same text the native field accepts
//! - `reset_view`: Snap back to the default framing
//! - `toggle_number_view`: Label every landmark, or clear
//! - `pan {direction}`: One step `up`, `down`, `left` or `right`
//! - `focus_landmark {index}`: Glide the camera to a landmark
//! - `reload_landmarks`: Fetch the landmark file again
//!
//! ### Queries
//! - `get_viewer_state`: Load status, geometry, highlight, camera pose
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! - `viewer_ready`, `landmarks_loaded {count, centroid, radius}`, `landmarks_failed {message}`
//! - `landmark_clicked {index}`, `number_view_changed {enabled}`
//! - `active_pan_changed {direction}`, `fps_update {fps}`

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
