use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One landmark as stored in the JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Ordered landmark sequence. The JSON file is a bare array of `{x, y, z}` objects
/// and the array position is the landmark index.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    pub points: Vec<Landmark>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("landmark file contains no points")]
    Empty,

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("expected {expected} landmarks, found {found}")]
    UnexpectedCount { expected: usize, found: usize },

    #[error("failed to load landmarks: {0}")]
    Load(String),
}

impl LandmarkSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check the payload before it reaches the store. `expected_count` is only
    /// enforced when the viewer is configured for a fixed-size landmark set.
    pub fn validate(&self, expected_count: Option<usize>) -> Result<(), LandmarkError> {
        if self.points.is_empty() {
            return Err(LandmarkError::Empty);
        }

        if let Some(expected) = expected_count {
            if self.points.len() != expected {
                return Err(LandmarkError::UnexpectedCount {
                    expected,
                    found: self.points.len(),
                });
            }
        }

        if let Some(index) = self
            .points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(LandmarkError::NonFinite { index });
        }

        Ok(())
    }

    /// Apply the load-time vertical offset and return the points in source space.
    pub fn shifted_points(&self, vertical_offset: f32) -> Vec<Vec3> {
        self.points
            .iter()
            .map(|p| p.to_vec3() + Vec3::Y * vertical_offset)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json_array() {
        let json = r#"[{"x": 0.5, "y": 0.25, "z": -0.01}, {"x": 0.4, "y": 0.3, "z": 0.02}]"#;
        let set: LandmarkSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.points[1], Landmark { x: 0.4, y: 0.3, z: 0.02 });
    }

    #[test]
    fn rejects_objects_missing_a_coordinate() {
        let json = r#"[{"x": 0.5, "y": 0.25}]"#;
        assert!(serde_json::from_str::<LandmarkSet>(json).is_err());
    }

    #[test]
    fn shifts_only_the_y_axis() {
        let set = LandmarkSet {
            points: vec![Landmark { x: 0.5, y: 0.7, z: 0.1 }],
        };

        let shifted = set.shifted_points(-0.6);
        assert!((shifted[0].y - 0.1).abs() < 1e-6);
        assert_eq!(shifted[0].x, 0.5);
        assert_eq!(shifted[0].z, 0.1);
    }

    #[test]
    fn validation_reports_first_problem() {
        assert_eq!(LandmarkSet::default().validate(None), Err(LandmarkError::Empty));

        let set = LandmarkSet {
            points: vec![
                Landmark { x: 0.0, y: 0.0, z: 0.0 },
                Landmark { x: f32::NAN, y: 0.0, z: 0.0 },
            ],
        };
        assert_eq!(set.validate(None), Err(LandmarkError::NonFinite { index: 1 }));
        assert_eq!(
            set.validate(Some(468)),
            Err(LandmarkError::UnexpectedCount { expected: 468, found: 2 })
        );
    }
}
