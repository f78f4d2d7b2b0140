use bevy::prelude::*;
use constants::coordinate_system::to_view_space;
use constants::landmarks::EMPTY_BOUNDING_RADIUS;

use super::geometry::{bounding_radius, centroid};

/// Outcome of the most recent landmark load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded(usize),
    Failed(String),
}

impl LoadStatus {
    pub fn describe(&self) -> String {
        match self {
            Self::Loading => "Loading landmarks...".to_string(),
            Self::Loaded(count) => format!("{count} landmarks loaded"),
            Self::Failed(message) => format!("Landmarks unavailable: {message}"),
        }
    }
}

/// Current landmark sequence in source space (vertical offset applied) with its
/// centroid and bounding radius. The derived values are only written by `replace`
/// and `clear`, so they always describe `points`.
#[derive(Resource, Debug, Clone)]
pub struct LandmarkStore {
    points: Vec<Vec3>,
    centroid: Vec3,
    bounding_radius: f32,
    generation: u32,
    pub status: LoadStatus,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            centroid: Vec3::ZERO,
            bounding_radius: EMPTY_BOUNDING_RADIUS,
            generation: 0,
            status: LoadStatus::Loading,
        }
    }
}

impl LandmarkStore {
    /// Publish a new sequence and recompute the derived geometry.
    pub fn replace(&mut self, points: Vec<Vec3>) {
        self.centroid = centroid(&points);
        self.bounding_radius = bounding_radius(&points, self.centroid);
        self.status = LoadStatus::Loaded(points.len());
        self.points = points;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop all points, e.g. after a failed reload.
    pub fn clear(&mut self) {
        self.points.clear();
        self.centroid = Vec3::ZERO;
        self.bounding_radius = EMPTY_BOUNDING_RADIUS;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.clear();
        self.status = LoadStatus::Failed(message.into());
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// Bumped on every replacement; systems compare it to detect a new sequence.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Landmark `index` as displayed, after the cloud reflection.
    pub fn view_position(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied().map(to_view_space)
    }

    /// Centroid as displayed. The radius needs no mapping since the reflection is rigid.
    pub fn view_centroid(&self) -> Vec3 {
        to_view_space(self.centroid)
    }
}
