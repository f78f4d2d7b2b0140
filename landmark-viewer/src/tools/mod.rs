//! User-facing viewer tools: highlight selection, number view and the native
//! control panel, coordinated through a shared set of viewer command events.
//!
//! ## Command Flow
//!
//! ```text
//! Control panel buttons / text field (native)
//! Arrow keys and shortcuts (native)          ──> ViewerCommands ──> *Event
//! JSON-RPC methods from the host page (WASM)
//!
//! ResetViewEvent         ─> camera::reset::handle_reset_view
//! PanRequestEvent        ─> camera::pan::apply_pan_requests
//! FocusRequestEvent      ─> camera::focus::handle_focus_requests
//! HighlightInputEvent    ─> highlight::handle_highlight_input
//! NumberViewToggleEvent  ─> number_view::handle_number_view_toggle
//! ReloadLandmarksEvent   ─> loading::landmark_loader::handle_reload_requests
//! ```
//!
//! ## Cross-Platform Considerations
//!
//! ### Native Builds
//! - `bevy_ui` control panel with text field, reset, number view and arrow buttons
//! - Arrow keys pan unless the text field has focus
//!
//! ### WASM Builds
//! - The host page renders the form inputs and drives the viewer over JSON-RPC 2.0
//! - Clicked landmark and load status are pushed back as notifications

/// Native control panel: text field, buttons and status line.
pub mod control_panel;

/// Highlight state and parsing of the index text input.
pub mod highlight;

/// Number view toggle labelling every landmark at once.
pub mod number_view;

/// Viewer command events and the writer bundle used by every input surface.
pub mod viewer_commands;
