//! Hand role assignment and cross-frame control state.
//!
//! The right hand steers, the left hand sets speed. This module resolves
//! which roles are present in a frame and applies the hold/reset policy
//! when a hand drops out: losing the steering hand stops the vehicle on
//! that same frame, while the last speed is held until the throttle hand
//! reappears.

use crate::classifier::{self, ControlVariant, PinchCalibration};
use crate::command::{CommandToken, Direction};
use crate::fingers::FingerState;
use crate::landmarks::{Handedness, LandmarkFrame, LandmarkSet};

/// Hands present in a frame, resolved by control role.
///
/// Observations fold in tracker order, so when the tracker labels two
/// hands the same way the last one wins its role.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameHands {
    /// No hands detected
    NoHands,
    /// Steering (right) hand only
    Steering(LandmarkSet),
    /// Throttle (left) hand only
    Throttle(LandmarkSet),
    /// Both roles present
    Both {
        /// Steering hand landmarks
        steering: LandmarkSet,
        /// Throttle hand landmarks
        throttle: LandmarkSet,
    },
}

impl FrameHands {
    /// Resolve a frame's observations into control roles
    #[must_use]
    pub fn resolve(frame: &LandmarkFrame) -> Self {
        let mut steering = None;
        let mut throttle = None;

        for hand in &frame.hands {
            match hand.handedness {
                Handedness::Right => steering = Some(hand.landmarks.clone()),
                Handedness::Left => throttle = Some(hand.landmarks.clone()),
            }
        }

        match (steering, throttle) {
            (None, None) => Self::NoHands,
            (Some(s), None) => Self::Steering(s),
            (None, Some(t)) => Self::Throttle(t),
            (Some(s), Some(t)) => Self::Both {
                steering: s,
                throttle: t,
            },
        }
    }
}

/// Persistent (direction, speed) state advanced once per frame.
///
/// This is the only gesture state that survives between frames; frames
/// themselves are transient.
#[derive(Debug, Clone)]
pub struct ControlState {
    variant: ControlVariant,
    calibration: PinchCalibration,
    max_finger_speed: u8,
    direction: Direction,
    speed: Option<u8>,
}

impl ControlState {
    /// Create the initial state: stopped, with speed 0 where the variant
    /// carries one
    #[must_use]
    pub fn new(variant: ControlVariant, calibration: PinchCalibration, max_finger_speed: u8) -> Self {
        let speed = if variant.carries_speed() { Some(0) } else { None };
        Self {
            variant,
            calibration,
            max_finger_speed,
            direction: Direction::Stop,
            speed,
        }
    }

    /// Advance the state by one frame and return the command it implies
    pub fn advance(&mut self, hands: &FrameHands) -> CommandToken {
        match hands {
            FrameHands::NoHands => {
                // Steering input gone: stop now, keep the last speed
                self.direction = Direction::Stop;
            }
            FrameHands::Steering(steering) => {
                self.direction = Self::steer(steering);
            }
            FrameHands::Throttle(throttle) => {
                // Direction is held in speed-carrying variants; without a
                // speed hand role there is nothing to hold for, so stop
                if !self.variant.carries_speed() {
                    self.direction = Direction::Stop;
                }
                self.update_speed(throttle);
            }
            FrameHands::Both { steering, throttle } => {
                self.direction = Self::steer(steering);
                self.update_speed(throttle);
            }
        }

        CommandToken::new(self.direction, self.speed)
    }

    /// Current driving direction
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current speed step, if the variant carries one
    #[must_use]
    pub fn speed(&self) -> Option<u8> {
        self.speed
    }

    fn steer(steering: &LandmarkSet) -> Direction {
        classifier::classify_direction(FingerState::from_landmarks(steering))
    }

    fn update_speed(&mut self, throttle: &LandmarkSet) {
        self.speed = match self.variant {
            ControlVariant::DirectionOnly => None,
            ControlVariant::FingerCount => {
                let count = FingerState::from_landmarks(throttle).raised_count();
                Some(classifier::speed_from_count(count, self.max_finger_speed))
            }
            ControlVariant::Pinch => Some(self.calibration.pinch_speed(throttle)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FINGER_JOINT_PAIRS, INDEX_TIP, MAX_FINGER_SPEED, THUMB_LOWER, THUMB_TIP};
    use crate::landmarks::{HandObservation, Landmark};

    fn hand(pattern: [bool; 5]) -> LandmarkSet {
        let mut points = vec![Landmark::new(0.5, 0.5); 21];

        points[THUMB_LOWER] = Landmark::new(0.4, 0.5);
        points[THUMB_TIP] = if pattern[0] {
            Landmark::new(0.3, 0.5)
        } else {
            Landmark::new(0.45, 0.5)
        };

        for (i, (tip, _lower)) in FINGER_JOINT_PAIRS.iter().enumerate() {
            points[*tip] = if pattern[i + 1] {
                Landmark::new(0.5, 0.3)
            } else {
                Landmark::new(0.5, 0.7)
            };
        }

        LandmarkSet::new(points).unwrap()
    }

    fn observation(handedness: Handedness, landmarks: LandmarkSet) -> HandObservation {
        HandObservation {
            handedness,
            score: 0.9,
            landmarks,
        }
    }

    fn frame(hands: Vec<HandObservation>) -> LandmarkFrame {
        LandmarkFrame { hands }
    }

    const FORWARD: [bool; 5] = [false, true, false, false, false];
    const LEFT: [bool; 5] = [false, false, false, false, true];

    fn count_state() -> ControlState {
        ControlState::new(
            ControlVariant::FingerCount,
            PinchCalibration::default(),
            MAX_FINGER_SPEED,
        )
    }

    #[test]
    fn test_resolve_empty_frame() {
        assert_eq!(FrameHands::resolve(&frame(vec![])), FrameHands::NoHands);
    }

    #[test]
    fn test_resolve_assigns_roles() {
        let steering = hand(FORWARD);
        let throttle = hand([true; 5]);
        let resolved = FrameHands::resolve(&frame(vec![
            observation(Handedness::Left, throttle.clone()),
            observation(Handedness::Right, steering.clone()),
        ]));

        assert_eq!(resolved, FrameHands::Both { steering, throttle });
    }

    #[test]
    fn test_resolve_duplicate_labels_last_wins() {
        let first = hand(FORWARD);
        let second = hand(LEFT);
        let resolved = FrameHands::resolve(&frame(vec![
            observation(Handedness::Right, first),
            observation(Handedness::Right, second.clone()),
        ]));

        assert_eq!(resolved, FrameHands::Steering(second));
    }

    #[test]
    fn test_initial_state_is_stopped() {
        let mut state = count_state();
        let token = state.advance(&FrameHands::NoHands);
        assert_eq!(token.encode(), "S0");
    }

    #[test]
    fn test_no_hands_keeps_speed() {
        let mut state = count_state();
        let both = FrameHands::resolve(&frame(vec![
            observation(Handedness::Right, hand(FORWARD)),
            observation(Handedness::Left, hand([false, true, true, true, false])),
        ]));
        assert_eq!(state.advance(&both).encode(), "F3");

        // Hands vanish: stop now, speed stays 3
        assert_eq!(state.advance(&FrameHands::NoHands).encode(), "S3");
        assert_eq!(state.direction(), Direction::Stop);
        assert_eq!(state.speed(), Some(3));
    }

    #[test]
    fn test_throttle_only_holds_direction() {
        let mut state = count_state();
        let both = FrameHands::resolve(&frame(vec![
            observation(Handedness::Right, hand(FORWARD)),
            observation(Handedness::Left, hand([false, true, false, false, false])),
        ]));
        assert_eq!(state.advance(&both).encode(), "F1");

        // Steering hand drops out while the throttle hand changes speed
        let throttle_only = FrameHands::Throttle(hand([true; 5]));
        assert_eq!(state.advance(&throttle_only).encode(), "F5");
    }

    #[test]
    fn test_steering_only_holds_speed() {
        let mut state = count_state();
        let both = FrameHands::resolve(&frame(vec![
            observation(Handedness::Right, hand(FORWARD)),
            observation(Handedness::Left, hand([true, true, false, false, false])),
        ]));
        assert_eq!(state.advance(&both).encode(), "F2");

        let steering_only = FrameHands::Steering(hand(LEFT));
        assert_eq!(state.advance(&steering_only).encode(), "L2");
    }

    #[test]
    fn test_direction_only_variant_has_no_speed() {
        let mut state = ControlState::new(
            ControlVariant::DirectionOnly,
            PinchCalibration::default(),
            MAX_FINGER_SPEED,
        );

        let steering_only = FrameHands::Steering(hand(FORWARD));
        assert_eq!(state.advance(&steering_only).encode(), "F");

        // A lone throttle hand cannot steer in this variant
        let throttle_only = FrameHands::Throttle(hand([true; 5]));
        assert_eq!(state.advance(&throttle_only).encode(), "S");
        assert_eq!(state.speed(), None);
    }

    #[test]
    fn test_pinch_variant_uses_calibration() {
        let mut state = ControlState::new(
            ControlVariant::Pinch,
            PinchCalibration::default(),
            MAX_FINGER_SPEED,
        );

        // Thumb and index tips 200 px apart in a 640 px wide frame
        let mut points = vec![Landmark::new(0.5, 0.5); 21];
        points[THUMB_TIP] = Landmark::new(0.2, 0.5);
        points[INDEX_TIP] = Landmark::new(0.5125, 0.5);
        let throttle = LandmarkSet::new(points).unwrap();

        let token = state.advance(&FrameHands::Throttle(throttle));
        assert_eq!(token.speed, Some(9));
    }
}
