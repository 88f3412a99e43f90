//! Gesture classification: finger patterns to directions, hand geometry
//! to speed steps.

use crate::command::Direction;
use crate::constants::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_PINCH_MAX_DISTANCE,
    DEFAULT_PINCH_MIN_DISTANCE, INDEX_TIP, MAX_PINCH_SPEED, THUMB_TIP,
};
use crate::fingers::FingerState;
use crate::landmarks::LandmarkSet;

/// Which speed control accompanies the steering gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlVariant {
    /// Steering only, no speed digit on the wire
    DirectionOnly,
    /// Speed from the throttle hand's raised-finger count
    FingerCount,
    /// Speed from the throttle hand's thumb-to-index pinch distance
    Pinch,
}

impl ControlVariant {
    /// Whether tokens carry a speed digit in this variant
    #[must_use]
    pub fn carries_speed(self) -> bool {
        !matches!(self, Self::DirectionOnly)
    }
}

/// Map a finger pattern to a driving direction.
///
/// Only the four trained patterns steer; every other pattern maps to
/// Stop, so an unrecognized pose can never produce motion.
#[must_use]
pub fn classify_direction(fingers: FingerState) -> Direction {
    match fingers.0 {
        [false, true, false, false, false] => Direction::Forward,
        [false, true, true, false, false] => Direction::Backward,
        [false, false, false, false, true] => Direction::Left,
        [true, false, false, false, false] => Direction::Right,
        _ => Direction::Stop,
    }
}

/// Speed step from a raised-finger count, clamped to the ceiling
#[must_use]
pub fn speed_from_count(count: u8, max_speed: u8) -> u8 {
    count.min(max_speed)
}

/// Pixel-space calibration for the pinch speed control.
///
/// Landmarks are normalized, so distances are measured after scaling by
/// the frame dimensions. The mapping is therefore resolution dependent;
/// recalibrate when the capture resolution changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchCalibration {
    /// Distance at or below which speed is 0, in pixels
    pub min_distance: f32,
    /// Distance at or above which speed is the ceiling, in pixels
    pub max_distance: f32,
    /// Highest speed step the pinch maps onto
    pub max_speed: u8,
    /// Frame width used to denormalize landmark x coordinates
    pub frame_width: u32,
    /// Frame height used to denormalize landmark y coordinates
    pub frame_height: u32,
}

impl Default for PinchCalibration {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_PINCH_MIN_DISTANCE,
            max_distance: DEFAULT_PINCH_MAX_DISTANCE,
            max_speed: MAX_PINCH_SPEED,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl PinchCalibration {
    /// Thumb-to-index tip distance for a hand, in pixels
    #[must_use]
    pub fn pinch_distance(&self, landmarks: &LandmarkSet) -> f32 {
        let thumb = landmarks.point(THUMB_TIP);
        let index = landmarks.point(INDEX_TIP);
        let dx = (thumb.x - index.x) * self.frame_width as f32;
        let dy = (thumb.y - index.y) * self.frame_height as f32;
        dx.hypot(dy)
    }

    /// Map a pinch distance in pixels onto a speed step.
    ///
    /// Linear between the calibration bounds, truncated to an integer and
    /// clamped so the result is always in `0..=max_speed`.
    #[must_use]
    pub fn speed_from_distance(&self, distance: f32) -> u8 {
        let span = self.max_distance - self.min_distance;
        let fraction = ((distance - self.min_distance) / span).clamp(0.0, 1.0);
        let speed = (fraction * f32::from(self.max_speed)) as u8;
        speed.min(self.max_speed)
    }

    /// Speed step from a hand's thumb-to-index pinch
    #[must_use]
    pub fn pinch_speed(&self, landmarks: &LandmarkSet) -> u8 {
        self.speed_from_distance(self.pinch_distance(landmarks))
    }
}
