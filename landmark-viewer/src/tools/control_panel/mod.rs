//! Native control panel mirroring the host page form: highlight text field,
//! reset and number-view buttons, a 3x3 arrow grid and the status lines.
//!
//! WASM builds leave the panel out and take the same commands over JSON-RPC.
//! `TextInputState` is registered on every platform since the keyboard
//! shortcuts consult it.

/// Button, text field focus and typing handlers (native only).
pub mod interactions;

/// Text field state and panel marker components.
pub mod state;

/// Panel spawning and the systems keeping it in sync with viewer state.
pub mod ui;

use bevy::prelude::*;

use state::TextInputState;

pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextInputState>();

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::engine::core::app_setup::ViewerSet;
            use crate::engine::core::app_state::AppState;
            use interactions::{
                number_view_button_interaction, pan_button_interaction, reset_button_interaction,
                text_field_focus, text_field_typing,
            };
            use ui::{
                reflect_number_view_button, reflect_pan_buttons, reflect_status_lines,
                reflect_text_field, spawn_control_panel,
            };

            app.add_systems(Startup, spawn_control_panel);
            app.add_systems(
                Update,
                (
                    (text_field_focus, text_field_typing).chain(),
                    reset_button_interaction,
                    number_view_button_interaction,
                    pan_button_interaction,
                )
                    .in_set(ViewerSet::Input)
                    .run_if(in_state(AppState::Running)),
            );
            app.add_systems(
                Update,
                (
                    reflect_text_field,
                    reflect_number_view_button,
                    reflect_pan_buttons,
                    reflect_status_lines,
                )
                    .in_set(ViewerSet::Render),
            );
        }
    }
}
