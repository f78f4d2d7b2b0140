use bevy::prelude::*;
use constants::landmarks::FACE_MESH_LANDMARK_COUNT;
use constants::render_settings::STATUS_COLOUR;

use super::state::*;
use crate::engine::camera::pan::{ActivePanButton, PanDirection};
use crate::engine::landmarks::store::LandmarkStore;
use crate::engine::render::picking::LastClickedLandmark;
use crate::tools::number_view::NumberView;

pub fn input_placeholder() -> String {
    format!("ex) 10, 130, 312, ...(0~{})", FACE_MESH_LANDMARK_COUNT - 1)
}

pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_ACTIVE: Color = Color::srgb(0.16, 0.40, 0.78);
pub const NUMBER_VIEW_ACTIVE: Color = Color::srgb(0.56, 0.16, 0.52);

const FIELD_IDLE: Color = Color::srgb(0.12, 0.13, 0.15);
const FIELD_FOCUSED: Color = Color::srgb(0.16, 0.18, 0.22);
const TEXT_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);
const PLACEHOLDER_COLOUR: Color = Color::srgb(0.55, 0.57, 0.60);

fn button_node(width: Val, height: Val) -> Node {
    Node {
        width,
        height,
        display: Display::Flex,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        border: UiRect::all(Val::Px(1.0)),
        padding: UiRect::axes(Val::Px(10.0), Val::Px(0.0)),
        ..default()
    }
}

// Spawns the control panel: text field, buttons, arrow grid and status lines
pub fn spawn_control_panel(mut commands: Commands) {
    commands
        .spawn((
            ControlPanelRoot,
            Name::new("ControlPanel"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(30.0),
                top: Val::Px(30.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexStart,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|panel| {
            // Highlight input
            panel
                .spawn((
                    HighlightInputField,
                    Button,
                    Name::new("HighlightInput"),
                    BackgroundColor(FIELD_IDLE),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Px(520.0),
                        height: Val::Px(40.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(0.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        overflow: Overflow::clip_x(),
                        ..default()
                    },
                ))
                .with_children(|field| {
                    field.spawn((
                        HighlightInputText,
                        Text::new(input_placeholder()),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(PLACEHOLDER_COLOUR),
                    ));
                });

            // Reset and number view
            panel
                .spawn(Node {
                    display: Display::Flex,
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        ResetViewButton,
                        Button,
                        Name::new("ResetViewButton"),
                        BackgroundColor(BUTTON_IDLE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        button_node(Val::Auto, Val::Px(36.0)),
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("Reset Camera View"),
                            TextFont { font_size: 16.0, ..default() },
                            TextColor(TEXT_COLOUR),
                        ));
                    });

                    row.spawn((
                        NumberViewButton,
                        Button,
                        Name::new("NumberViewButton"),
                        BackgroundColor(BUTTON_IDLE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        button_node(Val::Auto, Val::Px(36.0)),
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            NumberViewLabel,
                            Text::new(NumberView::default().button_label()),
                            TextFont { font_size: 16.0, ..default() },
                            TextColor(TEXT_COLOUR),
                        ));
                    });
                });

            // Arrow grid, 3x3 with arrows on the edges
            panel
                .spawn((
                    Name::new("PanGrid"),
                    Node {
                        display: Display::Grid,
                        grid_template_columns: RepeatedGridTrack::px(3, 50.0),
                        grid_template_rows: RepeatedGridTrack::px(3, 50.0),
                        row_gap: Val::Px(8.0),
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                ))
                .with_children(|grid| {
                    let cells = [
                        None,
                        Some(PanDirection::Up),
                        None,
                        Some(PanDirection::Left),
                        None,
                        Some(PanDirection::Right),
                        None,
                        Some(PanDirection::Down),
                        None,
                    ];
                    for cell in cells {
                        match cell {
                            Some(direction) => {
                                grid.spawn((
                                    PanButton(direction),
                                    Button,
                                    Name::new(format!("Pan{}", direction.as_str())),
                                    BackgroundColor(BUTTON_IDLE),
                                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                                    button_node(Val::Px(50.0), Val::Px(50.0)),
                                ))
                                .with_children(|btn| {
                                    btn.spawn((
                                        Text::new(direction.arrow()),
                                        TextFont { font_size: 20.0, ..default() },
                                        TextColor(TEXT_COLOUR),
                                    ));
                                });
                            }
                            None => {
                                grid.spawn(Node::default());
                            }
                        }
                    }
                });

            panel.spawn((
                ClickedLandmarkText,
                Text::new(clicked_landmark_line(None)),
                TextFont { font_size: 18.0, ..default() },
                TextColor(STATUS_COLOUR),
            ));

            panel.spawn((
                LoadStatusText,
                Text::new("Loading landmarks..."),
                TextFont { font_size: 14.0, ..default() },
                TextColor(PLACEHOLDER_COLOUR),
            ));
        });
}

pub fn clicked_landmark_line(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("Clicked LandMark Number: {index}"),
        None => "Clicked LandMark Number: ".to_string(),
    }
}

pub fn reflect_text_field(
    text_input: Res<TextInputState>,
    mut fields: Query<&mut BackgroundColor, With<HighlightInputField>>,
    mut labels: Query<(&mut Text, &mut TextColor), With<HighlightInputText>>,
) {
    if !text_input.is_changed() { return; }

    if let Ok(mut bg) = fields.single_mut() {
        *bg = BackgroundColor(if text_input.focused { FIELD_FOCUSED } else { FIELD_IDLE });
    }

    if let Ok((mut text, mut colour)) = labels.single_mut() {
        if text_input.text.is_empty() && !text_input.focused {
            *text = Text::new(input_placeholder());
            *colour = TextColor(PLACEHOLDER_COLOUR);
        } else {
            let caret = if text_input.focused { "|" } else { "" };
            *text = Text::new(format!("{}{caret}", text_input.text));
            *colour = TextColor(TEXT_COLOUR);
        }
    }
}

pub fn reflect_number_view_button(
    number_view: Res<NumberView>,
    mut buttons: Query<&mut BackgroundColor, With<NumberViewButton>>,
    mut labels: Query<&mut Text, With<NumberViewLabel>>,
) {
    if !number_view.is_changed() { return; }

    if let Ok(mut bg) = buttons.single_mut() {
        *bg = BackgroundColor(if number_view.enabled { NUMBER_VIEW_ACTIVE } else { BUTTON_IDLE });
    }
    if let Ok(mut text) = labels.single_mut() {
        *text = Text::new(number_view.button_label());
    }
}

// Arrow buttons render pressed while their key is held
pub fn reflect_pan_buttons(
    active: Res<ActivePanButton>,
    mut buttons: Query<(&PanButton, &Interaction, &mut BackgroundColor)>,
) {
    if !active.is_changed() { return; }

    for (button, interaction, mut bg) in &mut buttons {
        *bg = BackgroundColor(if active.0 == Some(button.0) {
            BUTTON_ACTIVE
        } else if *interaction == Interaction::Hovered {
            BUTTON_HOVERED
        } else {
            BUTTON_IDLE
        });
    }
}

pub fn reflect_status_lines(
    clicked: Res<LastClickedLandmark>,
    store: Res<LandmarkStore>,
    mut clicked_text: Query<&mut Text, (With<ClickedLandmarkText>, Without<LoadStatusText>)>,
    mut status_text: Query<&mut Text, (With<LoadStatusText>, Without<ClickedLandmarkText>)>,
) {
    if clicked.is_changed() {
        if let Ok(mut text) = clicked_text.single_mut() {
            *text = Text::new(clicked_landmark_line(clicked.0));
        }
    }
    if store.is_changed() {
        if let Ok(mut text) = status_text.single_mut() {
            *text = Text::new(store.status.describe());
        }
    }
}
