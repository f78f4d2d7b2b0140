use bevy::prelude::*;

use crate::engine::camera::pan::PanDirection;

// Resources
#[derive(Resource, Debug, Default, Clone)]
pub struct TextInputState {
    pub text: String,
    pub focused: bool,
}

impl TextInputState {
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

// Components
#[derive(Component)]
pub struct ControlPanelRoot;
#[derive(Component)]
pub struct HighlightInputField;
#[derive(Component)]
pub struct HighlightInputText;
#[derive(Component)]
pub struct ResetViewButton;
#[derive(Component)]
pub struct NumberViewButton;
#[derive(Component)]
pub struct NumberViewLabel;
#[derive(Component)]
pub struct PanButton(pub PanDirection);
#[derive(Component)]
pub struct ClickedLandmarkText;
#[derive(Component)]
pub struct LoadStatusText;
