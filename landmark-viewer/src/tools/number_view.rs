use bevy::prelude::*;

use crate::engine::landmarks::store::LandmarkStore;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::highlight::HighlightState;
use crate::tools::viewer_commands::NumberViewToggleEvent;

/// Mode labelling every landmark at once.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct NumberView {
    pub enabled: bool,
}

impl NumberView {
    /// Flip the mode. For an index-set highlight, enabling selects `0..landmark_count`
    /// and disabling clears the selection whatever it was. A single-index highlight
    /// is left alone; number view then only adds labels.
    pub fn toggle(&mut self, highlight: &mut HighlightState, landmark_count: usize) -> bool {
        self.enabled = !self.enabled;

        if let HighlightState::Set(indices) = highlight {
            if self.enabled {
                *indices = (0..landmark_count).collect();
            } else {
                indices.clear();
            }
        }

        self.enabled
    }

    pub fn button_label(&self) -> &'static str {
        if self.enabled {
            "cancel number view"
        } else {
            "show number View"
        }
    }
}

pub fn handle_number_view_toggle(
    mut events: EventReader<NumberViewToggleEvent>,
    mut number_view: ResMut<NumberView>,
    mut highlight: ResMut<HighlightState>,
    store: Res<LandmarkStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        let enabled = number_view.toggle(&mut highlight, store.len());
        info!("Number view {} via {:?}", if enabled { "on" } else { "off" }, event.source);
        rpc_interface.send_notification(
            "number_view_changed",
            serde_json::json!({ "enabled": enabled }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::viewer_config::ViewerVariant;

    #[test]
    fn enabling_highlights_every_landmark() {
        let mut view = NumberView::default();
        let mut highlight = HighlightState::for_variant(ViewerVariant::IndexSet);
        highlight.apply_input("5, 9");

        assert!(view.toggle(&mut highlight, 468));
        let indices = highlight.indices();
        assert_eq!(indices.len(), 468);
        assert_eq!(indices, (0..468).collect::<Vec<_>>());
    }

    #[test]
    fn disabling_clears_regardless_of_prior_state() {
        let mut view = NumberView::default();
        let mut highlight = HighlightState::for_variant(ViewerVariant::IndexSet);
        view.toggle(&mut highlight, 468);
        highlight.apply_input("1, 2, 3");

        assert!(!view.toggle(&mut highlight, 468));
        assert!(highlight.is_empty());
        assert_eq!(view.button_label(), "show number View");
    }

    #[test]
    fn single_index_highlight_is_untouched() {
        let mut view = NumberView::default();
        let mut highlight = HighlightState::Single(Some(4));

        view.toggle(&mut highlight, 468);
        assert_eq!(highlight, HighlightState::Single(Some(4)));
        view.toggle(&mut highlight, 468);
        assert_eq!(highlight, HighlightState::Single(Some(4)));
    }
}
