//! Hand landmark data model shared by the gesture pipeline.
//!
//! Landmarks arrive from an external hand tracker in normalized image
//! coordinates. This module turns that raw input into validated types
//! before any gesture logic runs, so downstream components never see a
//! malformed hand.

use crate::constants::NUM_HAND_LANDMARKS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Landmark {
    /// Horizontal position in [0, 1], left edge at 0
    pub x: f32,
    /// Vertical position in [0, 1], top edge at 0
    pub y: f32,
}

impl Landmark {
    /// Create a landmark from normalized coordinates
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Landmark {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Landmark> for (f32, f32) {
    fn from(landmark: Landmark) -> Self {
        (landmark.x, landmark.y)
    }
}

/// Exactly 21 landmarks following the fixed hand schema.
///
/// Index 0 is the wrist, 4 the thumb tip, 8/12/16/20 the finger tips and
/// 3/6/10/14/18 the joints below them (see `constants`). The length is
/// checked at construction, which keeps every consumer total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet(Vec<Landmark>);

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = Error;

    fn try_from(points: Vec<Landmark>) -> Result<Self> {
        if points.len() == NUM_HAND_LANDMARKS {
            Ok(Self(points))
        } else {
            Err(Error::InvalidLandmarkSet(format!(
                "expected {} landmarks, got {}",
                NUM_HAND_LANDMARKS,
                points.len()
            )))
        }
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.0
    }
}

impl LandmarkSet {
    /// Build a validated landmark set from raw points
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLandmarkSet` when the number of points does
    /// not match the 21-point hand schema.
    pub fn new(points: Vec<Landmark>) -> Result<Self> {
        Self::try_from(points)
    }

    /// Landmark at a schema index (must be below 21)
    #[must_use]
    pub fn point(&self, index: usize) -> Landmark {
        self.0[index]
    }
}

/// Which hand the tracker believes produced an observation.
///
/// Labels come straight from the upstream tracker and may flicker between
/// frames; no smoothing happens on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    /// Left hand (throttle role)
    Left,
    /// Right hand (steering role)
    Right,
}

/// One detected hand in a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    /// Tracker's left/right label
    pub handedness: Handedness,
    /// Tracker's detection confidence in [0, 1]
    #[serde(default = "default_score")]
    pub score: f32,
    /// Validated 21-point landmark set
    pub landmarks: LandmarkSet,
}

fn default_score() -> f32 {
    1.0
}

/// All hands observed in one video frame, in tracker order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Zero or more hand observations
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}
