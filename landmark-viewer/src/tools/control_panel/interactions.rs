use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use super::state::*;
use super::ui::{BUTTON_ACTIVE, BUTTON_HOVERED, BUTTON_IDLE, BUTTON_PRESSED};
use crate::engine::camera::pan::ActivePanButton;
use crate::tools::viewer_commands::{CommandSource, ViewerCommands};

/// Result of feeding one key press to the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Changed,
    Blurred,
    Ignored,
}

/// Apply a logical key to the field contents. Printable characters append,
/// `Backspace` deletes, `Enter` and `Escape` end editing.
pub fn apply_key(text: &mut String, key: &Key) -> TextEdit {
    match key {
        Key::Character(chars) => {
            let printable: String = chars.chars().filter(|c| !c.is_control()).collect();
            if printable.is_empty() {
                return TextEdit::Ignored;
            }
            text.push_str(&printable);
            TextEdit::Changed
        }
        Key::Space => {
            text.push(' ');
            TextEdit::Changed
        }
        Key::Backspace => {
            if text.pop().is_some() { TextEdit::Changed } else { TextEdit::Ignored }
        }
        Key::Enter | Key::Escape => TextEdit::Blurred,
        _ => TextEdit::Ignored,
    }
}

// Clicking the field focuses it, clicking anywhere else drops focus
pub fn text_field_focus(
    mouse_button: Res<ButtonInput<MouseButton>>,
    fields: Query<&Interaction, With<HighlightInputField>>,
    mut text_input: ResMut<TextInputState>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) { return; }

    let over_field = fields.iter().any(|i| *i != Interaction::None);
    if over_field && !text_input.focused {
        text_input.focus();
    } else if !over_field && text_input.focused {
        text_input.blur();
    }
}

// Typing into the focused field updates the highlight on every change
pub fn text_field_typing(
    mut key_events: EventReader<KeyboardInput>,
    mut text_input: ResMut<TextInputState>,
    mut commands: ViewerCommands,
) {
    if !text_input.focused {
        key_events.clear();
        return;
    }

    let mut changed = false;
    for event in key_events.read() {
        if event.state != ButtonState::Pressed { continue; }

        match apply_key(&mut text_input.text, &event.logical_key) {
            TextEdit::Changed => changed = true,
            TextEdit::Blurred => text_input.blur(),
            TextEdit::Ignored => {}
        }
    }

    if changed {
        commands.set_highlight_input(text_input.text.clone(), CommandSource::Ui);
    }
}

pub fn reset_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<ResetViewButton>)>,
    mut commands: ViewerCommands,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => { commands.reset_view(CommandSource::Ui); *bg = BackgroundColor(BUTTON_PRESSED); }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVERED),
            Interaction::None    => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

// Button colour follows NumberView, see reflect_number_view_button
pub fn number_view_button_interaction(
    q: Query<&Interaction, (Changed<Interaction>, With<Button>, With<NumberViewButton>)>,
    mut commands: ViewerCommands,
) {
    for interaction in &q {
        if *interaction == Interaction::Pressed {
            commands.toggle_number_view(CommandSource::Ui);
        }
    }
}

pub fn pan_button_interaction(
    mut q: Query<(&Interaction, &PanButton, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
    active: Res<ActivePanButton>,
    mut commands: ViewerCommands,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => { commands.pan(button.0, CommandSource::Ui); *bg = BackgroundColor(BUTTON_PRESSED); }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVERED),
            Interaction::None    => {
                *bg = BackgroundColor(if active.0 == Some(button.0) { BUTTON_ACTIVE } else { BUTTON_IDLE })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_append_and_backspace_deletes() {
        let mut text = String::new();
        for key in [
            Key::Character("1".into()),
            Key::Character("0".into()),
            Key::Character(",".into()),
            Key::Space,
            Key::Character("5".into()),
        ] {
            assert_eq!(apply_key(&mut text, &key), TextEdit::Changed);
        }
        assert_eq!(text, "10, 5");

        assert_eq!(apply_key(&mut text, &Key::Backspace), TextEdit::Changed);
        assert_eq!(text, "10, ");
    }

    #[test]
    fn backspace_on_empty_field_is_ignored() {
        let mut text = String::new();
        assert_eq!(apply_key(&mut text, &Key::Backspace), TextEdit::Ignored);
    }

    #[test]
    fn enter_and_escape_end_editing() {
        let mut text = "7".to_string();
        assert_eq!(apply_key(&mut text, &Key::Enter), TextEdit::Blurred);
        assert_eq!(apply_key(&mut text, &Key::Escape), TextEdit::Blurred);
        assert_eq!(apply_key(&mut text, &Key::ArrowLeft), TextEdit::Ignored);
        assert_eq!(text, "7");
    }
}
