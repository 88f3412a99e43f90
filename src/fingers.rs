//! Finger state extraction from hand landmarks.
//!
//! Decides, per finger, whether it is raised, using fixed joint
//! comparisons in normalized coordinates. The thumb rule assumes a
//! horizontally mirrored frame, which is how a user-facing camera feed
//! arrives after the usual selfie flip.

use crate::constants::{FINGER_JOINT_PAIRS, THUMB_LOWER, THUMB_TIP};
use crate::landmarks::LandmarkSet;

/// Raised/lowered state of the five fingers, thumb first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    /// Extract finger states from a validated landmark set
    #[must_use]
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Self {
        let mut raised = [false; 5];

        // Thumb: tip extends past the joint below it horizontally
        raised[0] = landmarks.point(THUMB_TIP).x < landmarks.point(THUMB_LOWER).x;

        // Other fingers: tip above the lower joint (y grows downward)
        for (i, (tip, lower)) in FINGER_JOINT_PAIRS.iter().enumerate() {
            raised[i + 1] = landmarks.point(*tip).y < landmarks.point(*lower).y;
        }

        Self(raised)
    }

    /// Number of raised fingers
    #[must_use]
    pub fn raised_count(&self) -> u8 {
        self.0.iter().filter(|&&up| up).count() as u8
    }
}
