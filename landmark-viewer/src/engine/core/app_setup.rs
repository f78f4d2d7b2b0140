use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::CLEAR_COLOUR;

// Crate engine modules
use crate::engine::assets::landmark_set::LandmarkSet;
use crate::engine::camera::{
    focus::{handle_focus_requests, tick_focus_animation},
    framing::{
        DefaultFraming, apply_pending_framing, cancel_pending_framing,
        queue_framing_on_landmark_change,
    },
    orbit_controller::{PointerCapture, orbit_camera_input, sync_camera_transform},
    pan::{ActivePanButton, apply_pan_requests, keyboard_viewer_shortcuts, notify_active_pan_changes},
    reset::handle_reset_view,
};
use crate::engine::core::app_state::{AppState, announce_viewer_ready, transition_to_running};
use crate::engine::core::viewer_config::ViewerConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::landmarks::store::LandmarkStore;
use crate::engine::loading::landmark_loader::{
    LandmarkLoader, handle_reload_requests, receive_landmarks, start_loading,
};
use crate::engine::render::{
    labels::{position_labels, sync_labels},
    picking::{LastClickedLandmark, on_landmark_clicked, on_landmark_pressed},
    point_cloud::{setup_landmark_cloud, sync_landmark_cloud, update_highlight_materials},
};
use crate::engine::scene::setup::{spawn_lights, spawn_viewer_camera};
use crate::engine::systems::fps_tracking::fps_notification_system;
// Crate tools and RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::{
    control_panel::ControlPanelPlugin,
    highlight::{HighlightState, handle_highlight_input},
    number_view::{NumberView, handle_number_view_toggle},
    viewer_commands::ViewerCommandsPlugin,
};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::scene::setup::spawn_fps_overlay;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

/// Per-frame ordering of the viewer systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    /// Keyboard, mouse and panel input turned into viewer commands.
    Input,
    /// Landmark loading and command handling.
    Commands,
    /// Focus animation and camera transform.
    Camera,
    /// Spheres, materials and labels.
    Render,
}

pub fn create_app() -> App {
    let mut app = App::new();
    let config = ViewerConfig::default();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MeshPickingPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers LandmarkSet as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<LandmarkSet>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ViewerCommandsPlugin);

    // Native control panel; WASM builds only register its state
    app.add_plugins(ControlPanelPlugin);

    info!("Starting landmark viewer ({:?})", config.variant);

    // Initialise resources early
    app.insert_resource(HighlightState::for_variant(config.variant))
        .insert_resource(config)
        .insert_resource(ClearColor(CLEAR_COLOUR))
        .init_resource::<LandmarkStore>()
        .init_resource::<LandmarkLoader>()
        .init_resource::<NumberView>()
        .init_resource::<ActivePanButton>()
        .init_resource::<LastClickedLandmark>()
        .init_resource::<PointerCapture>()
        .init_resource::<DefaultFraming>();

    app.configure_sets(
        Update,
        (
            ViewerSet::Input,
            ViewerSet::Commands,
            ViewerSet::Camera,
            ViewerSet::Render,
        )
            .chain(),
    );

    // Landmark clicks
    app.add_observer(on_landmark_pressed)
        .add_observer(on_landmark_clicked);

    app.add_systems(
        Startup,
        (
            spawn_viewer_camera,
            spawn_lights,
            setup_landmark_cloud,
            start_loading,
        ),
    );

    // Loading runs in both states so reloads are picked up while running.
    app.add_systems(
        Update,
        (
            (handle_reload_requests, receive_landmarks).chain(),
            transition_to_running.run_if(in_state(AppState::Loading)),
            (
                queue_framing_on_landmark_change,
                cancel_pending_framing,
                apply_pending_framing,
            )
                .chain(),
        )
            .chain()
            .in_set(ViewerSet::Commands),
    )
    .add_systems(OnEnter(AppState::Running), announce_viewer_ready);

    // Runtime systems - only run once the landmark load resolved
    app.add_systems(
        Update,
        (keyboard_viewer_shortcuts, orbit_camera_input)
            .in_set(ViewerSet::Input)
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(
        Update,
        (
            handle_highlight_input,
            handle_number_view_toggle,
            handle_reset_view,
            apply_pan_requests,
            handle_focus_requests,
        )
            .chain()
            .after(apply_pending_framing)
            .in_set(ViewerSet::Commands)
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(
        Update,
        (tick_focus_animation, sync_camera_transform)
            .chain()
            .in_set(ViewerSet::Camera),
    )
    .add_systems(
        Update,
        (
            sync_landmark_cloud,
            update_highlight_materials,
            sync_labels,
            position_labels,
        )
            .chain()
            .in_set(ViewerSet::Render),
    )
    .add_systems(
        Update,
        (notify_active_pan_changes, fps_notification_system).after(ViewerSet::Render),
    );

    // FPS overlay only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
