use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::engine::camera::pan::PanDirection;

/// Input surface a command came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    Rpc,
    Keyboard,
    Ui,
}

#[derive(Event, Debug, Clone)]
pub struct ResetViewEvent {
    pub source: CommandSource,
}

#[derive(Event, Debug, Clone)]
pub struct PanRequestEvent {
    pub direction: PanDirection,
    pub source: CommandSource,
}

#[derive(Event, Debug, Clone)]
pub struct NumberViewToggleEvent {
    pub source: CommandSource,
}

/// Raw contents of the highlight text input.
#[derive(Event, Debug, Clone)]
pub struct HighlightInputEvent {
    pub text: String,
    pub source: CommandSource,
}

#[derive(Event, Debug, Clone)]
pub struct FocusRequestEvent {
    pub index: usize,
    pub source: CommandSource,
}

#[derive(Event, Debug, Clone)]
pub struct ReloadLandmarksEvent {
    pub source: CommandSource,
}

/// Writers for every viewer command, shared by the control panel, keyboard
/// shortcuts and the RPC layer.
#[derive(SystemParam)]
pub struct ViewerCommands<'w> {
    reset: EventWriter<'w, ResetViewEvent>,
    pan: EventWriter<'w, PanRequestEvent>,
    number_view: EventWriter<'w, NumberViewToggleEvent>,
    highlight: EventWriter<'w, HighlightInputEvent>,
    focus: EventWriter<'w, FocusRequestEvent>,
    reload: EventWriter<'w, ReloadLandmarksEvent>,
}

impl ViewerCommands<'_> {
    pub fn reset_view(&mut self, source: CommandSource) {
        self.reset.write(ResetViewEvent { source });
    }

    pub fn pan(&mut self, direction: PanDirection, source: CommandSource) {
        self.pan.write(PanRequestEvent { direction, source });
    }

    pub fn toggle_number_view(&mut self, source: CommandSource) {
        self.number_view.write(NumberViewToggleEvent { source });
    }

    pub fn set_highlight_input(&mut self, text: impl Into<String>, source: CommandSource) {
        self.highlight.write(HighlightInputEvent {
            text: text.into(),
            source,
        });
    }

    pub fn focus_landmark(&mut self, index: usize, source: CommandSource) {
        self.focus.write(FocusRequestEvent { index, source });
    }

    pub fn reload_landmarks(&mut self, source: CommandSource) {
        self.reload.write(ReloadLandmarksEvent { source });
    }
}

/// Registers the viewer command events.
pub struct ViewerCommandsPlugin;

impl Plugin for ViewerCommandsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ResetViewEvent>()
            .add_event::<PanRequestEvent>()
            .add_event::<NumberViewToggleEvent>()
            .add_event::<HighlightInputEvent>()
            .add_event::<FocusRequestEvent>()
            .add_event::<ReloadLandmarksEvent>();
    }
}
