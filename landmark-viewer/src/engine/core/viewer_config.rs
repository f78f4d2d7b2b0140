use bevy::prelude::*;
use constants::camera::{
    FIELD_OF_VIEW_DEGREES, FIT_SCALE_SET, FIT_SCALE_SINGLE, FOCUS_LERP_FACTOR,
    FOCUS_SNAP_THRESHOLD, PAN_STEP,
};
use constants::landmarks::{
    FACE_MESH_LANDMARK_COUNT, LANDMARK_ASSET_PATH, LANDMARK_VERTICAL_OFFSET,
};

/// The two flavours of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerVariant {
    /// Comma-separated index set, numeric labels on highlighted points.
    IndexSet,
    /// One optional index, cleared when the view is reset.
    SingleIndex,
}

#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    pub variant: ViewerVariant,
    pub landmark_path: String,
    pub vertical_offset: f32,
    /// Reject landmark files of any other length when set. Only the
    /// `strict-count` build pins it to the face mesh size.
    pub expected_count: Option<usize>,
    pub field_of_view_degrees: f32,
    pub fit_scale: f32,
    pub pan_step: f32,
    pub focus_lerp_factor: f32,
    pub focus_snap_threshold: f32,
}

impl ViewerConfig {
    pub fn index_set() -> Self {
        Self {
            variant: ViewerVariant::IndexSet,
            landmark_path: LANDMARK_ASSET_PATH.to_string(),
            vertical_offset: LANDMARK_VERTICAL_OFFSET,
            expected_count: cfg!(feature = "strict-count").then_some(FACE_MESH_LANDMARK_COUNT),
            field_of_view_degrees: FIELD_OF_VIEW_DEGREES,
            fit_scale: FIT_SCALE_SET,
            pan_step: PAN_STEP,
            focus_lerp_factor: FOCUS_LERP_FACTOR,
            focus_snap_threshold: FOCUS_SNAP_THRESHOLD,
        }
    }

    pub fn single_index() -> Self {
        Self {
            variant: ViewerVariant::SingleIndex,
            fit_scale: FIT_SCALE_SINGLE,
            ..Self::index_set()
        }
    }

    /// Highlighted points carry numeric labels in the index-set viewer only.
    pub fn labels_follow_highlight(&self) -> bool {
        self.variant == ViewerVariant::IndexSet
    }

    pub fn clear_highlight_on_reset(&self) -> bool {
        self.variant == ViewerVariant::SingleIndex
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        if cfg!(feature = "single-index") {
            Self::single_index()
        } else {
            Self::index_set()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_count_feature_pins_face_mesh_size() {
        let expected = if cfg!(feature = "strict-count") {
            Some(468)
        } else {
            None
        };
        assert_eq!(ViewerConfig::index_set().expected_count, expected);
        assert_eq!(ViewerConfig::single_index().expected_count, expected);
    }

    #[test]
    fn single_index_frames_wider() {
        let single = ViewerConfig::single_index();
        assert_eq!(single.variant, ViewerVariant::SingleIndex);
        assert!(single.clear_highlight_on_reset());
        assert!(!single.labels_follow_highlight());
        assert!(single.fit_scale < ViewerConfig::index_set().fit_scale);
    }
}
