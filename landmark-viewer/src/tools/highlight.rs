use bevy::prelude::*;

use crate::engine::core::viewer_config::ViewerVariant;
use crate::tools::viewer_commands::HighlightInputEvent;

/// Landmark indices currently emphasised. The index-set viewer keeps a list
/// (order and duplicates as typed), the single-index viewer at most one index.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum HighlightState {
    Set(Vec<usize>),
    Single(Option<usize>),
}

impl HighlightState {
    pub fn for_variant(variant: ViewerVariant) -> Self {
        match variant {
            ViewerVariant::IndexSet => Self::Set(Vec::new()),
            ViewerVariant::SingleIndex => Self::Single(None),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Set(indices) => indices.contains(&index),
            Self::Single(selected) => *selected == Some(index),
        }
    }

    pub fn indices(&self) -> Vec<usize> {
        match self {
            Self::Set(indices) => indices.clone(),
            Self::Single(selected) => selected.iter().copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Set(indices) => indices.is_empty(),
            Self::Single(selected) => selected.is_none(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::Set(indices) => indices.clear(),
            Self::Single(selected) => *selected = None,
        }
    }

    /// Replace the highlight. A single-index highlight keeps the first entry.
    pub fn set_indices(&mut self, new_indices: Vec<usize>) {
        match self {
            Self::Set(indices) => *indices = new_indices,
            Self::Single(selected) => *selected = new_indices.first().copied(),
        }
    }

    /// Apply the text input contents.
    pub fn apply_input(&mut self, text: &str) {
        match self {
            Self::Set(indices) => *indices = parse_index_list(text),
            Self::Single(selected) => *selected = parse_single_index(text),
        }
    }
}

/// Split on commas and keep every token that is a non-negative integer.
/// Blank and non-numeric tokens are dropped, duplicates are kept.
pub fn parse_index_list(text: &str) -> Vec<usize> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<usize>().ok())
        .collect()
}

pub fn parse_single_index(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()
}

pub fn handle_highlight_input(
    mut events: EventReader<HighlightInputEvent>,
    mut highlight: ResMut<HighlightState>,
) {
    for event in events.read() {
        highlight.apply_input(&event.text);
        debug!("Highlight set to {:?} via {:?}", highlight.indices(), event.source);
    }
}
