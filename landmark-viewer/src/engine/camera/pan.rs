use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::orbit_controller::OrbitController;
use crate::engine::core::viewer_config::ViewerConfig;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::control_panel::state::TextInputState;
use crate::tools::viewer_commands::{CommandSource, PanRequestEvent, ViewerCommands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Convert string identifier to a direction for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowUp => Some(Self::Up),
            KeyCode::ArrowDown => Some(Self::Down),
            KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }

    /// View-space translation for one pan step.
    pub fn delta(&self, step: f32) -> Vec3 {
        match self {
            Self::Up => Vec3::new(0.0, step, 0.0),
            Self::Down => Vec3::new(0.0, -step, 0.0),
            Self::Left => Vec3::new(-step, 0.0, 0.0),
            Self::Right => Vec3::new(step, 0.0, 0.0),
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Left => "←",
            Self::Right => "→",
        }
    }
}

/// Direction whose on-screen button renders pressed because its arrow key is down.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ActivePanButton(pub Option<PanDirection>);

/// Arrow keys pan, `R` resets, `N` toggles number view, `F5` reloads the landmarks.
/// Ignored while the highlight text field has focus. Any key release clears the
/// pressed arrow button, whichever key it was.
pub fn keyboard_viewer_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    text_input: Res<TextInputState>,
    mut active: ResMut<ActivePanButton>,
    mut commands: ViewerCommands,
) {
    if !text_input.focused {
        for key in keyboard.get_just_pressed() {
            if let Some(direction) = PanDirection::from_key(*key) {
                commands.pan(direction, CommandSource::Keyboard);
                active.0 = Some(direction);
            }
        }

        if keyboard.just_pressed(KeyCode::KeyR) {
            commands.reset_view(CommandSource::Keyboard);
        }
        if keyboard.just_pressed(KeyCode::KeyN) {
            commands.toggle_number_view(CommandSource::Keyboard);
        }
        if keyboard.just_pressed(KeyCode::F5) {
            commands.reload_landmarks(CommandSource::Keyboard);
        }
    }

    if keyboard.get_just_released().next().is_some() {
        active.0 = None;
    }
}

pub fn apply_pan_requests(
    mut events: EventReader<PanRequestEvent>,
    mut cameras: Query<&mut OrbitController>,
    config: Res<ViewerConfig>,
) {
    let Ok(mut controller) = cameras.single_mut() else {
        events.clear();
        return;
    };

    for event in events.read() {
        controller.translate(event.direction.delta(config.pan_step));
    }
}

pub fn notify_active_pan_changes(
    active: Res<ActivePanButton>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if active.is_changed() && !active.is_added() {
        rpc_interface.send_notification(
            "active_pan_changed",
            serde_json::json!({ "direction": active.0.map(|d| d.as_str()) }),
        );
    }
}
