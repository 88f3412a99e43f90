//! Constants used throughout the application

/// Number of landmarks in a single hand set
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Wrist landmark index
pub const WRIST: usize = 0;

/// Thumb landmark indices (tip and the joint below it)
pub const THUMB_TIP: usize = 4;
pub const THUMB_LOWER: usize = 3;

/// Index finger tip landmark index
pub const INDEX_TIP: usize = 8;

/// (tip, lower joint) index pairs for the index, middle, ring and pinky fingers
pub const FINGER_JOINT_PAIRS: [(usize, usize); 4] = [(8, 6), (12, 10), (16, 14), (20, 18)];

/// Default pinch calibration bounds in pixels
pub const DEFAULT_PINCH_MIN_DISTANCE: f32 = 20.0;
pub const DEFAULT_PINCH_MAX_DISTANCE: f32 = 200.0;

/// Speed ceiling for the finger-count control variant
pub const MAX_FINGER_SPEED: u8 = 5;

/// Speed ceiling for the pinch control variant
pub const MAX_PINCH_SPEED: u8 = 9;

/// Default per-send transport timeout in milliseconds
pub const DEFAULT_SEND_TIMEOUT_MS: u64 = 200;

/// Default frame dimensions used to denormalize landmarks
pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;
