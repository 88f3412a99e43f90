//! Configuration management for the gesture drive application

use crate::classifier::{ControlVariant, PinchCalibration};
use crate::constants::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_PINCH_MAX_DISTANCE,
    DEFAULT_PINCH_MIN_DISTANCE, DEFAULT_SEND_TIMEOUT_MS, MAX_FINGER_SPEED, MAX_PINCH_SPEED,
};
use crate::dispatch::TransportSink;
use crate::transport::{HttpTransport, LogTransport};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vehicle link configuration
    pub vehicle: VehicleConfig,

    /// Gesture control configuration
    pub control: ControlConfig,

    /// Replay source configuration
    pub replay: ReplayConfig,
}

/// Vehicle link parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Base URL of the vehicle's HTTP command endpoint
    pub base_url: String,

    /// Per-send timeout in milliseconds
    pub send_timeout_ms: u64,
}

/// Gesture control parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Active control variant ("direction", "finger-count" or "pinch")
    pub variant: String,

    /// Speed ceiling for the finger-count variant (at most 9)
    pub max_finger_speed: u8,

    /// Pinch distance mapped to speed 0, in pixels
    pub pinch_min_distance: f32,

    /// Pinch distance mapped to the top speed, in pixels
    pub pinch_max_distance: f32,

    /// Speed ceiling for the pinch variant (at most 9)
    pub max_pinch_speed: u8,

    /// Frame width in pixels, used to denormalize landmarks
    pub frame_width: u32,

    /// Frame height in pixels, used to denormalize landmarks
    pub frame_height: u32,
}

/// Replay source parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Frames per second to pace replay at (0 replays unpaced)
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vehicle: VehicleConfig::default(),
            control: ControlConfig::default(),
            replay: ReplayConfig::default(),
        }
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
            send_timeout_ms: DEFAULT_SEND_TIMEOUT_MS,
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            variant: "finger-count".to_string(),
            max_finger_speed: MAX_FINGER_SPEED,
            pinch_min_distance: DEFAULT_PINCH_MIN_DISTANCE,
            pinch_max_distance: DEFAULT_PINCH_MAX_DISTANCE,
            max_pinch_speed: MAX_PINCH_SPEED,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { fps: 0 }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Control variant selected by the configuration
    pub fn control_variant(&self) -> Result<ControlVariant> {
        match self.control.variant.as_str() {
            "direction" | "direction-only" => Ok(ControlVariant::DirectionOnly),
            "finger-count" | "fingers" => Ok(ControlVariant::FingerCount),
            "pinch" => Ok(ControlVariant::Pinch),
            name => Err(Error::ConfigError(format!("Unknown control variant: {name}"))),
        }
    }

    /// Pinch calibration from the control section
    #[must_use]
    pub fn pinch_calibration(&self) -> PinchCalibration {
        PinchCalibration {
            min_distance: self.control.pinch_min_distance,
            max_distance: self.control.pinch_max_distance,
            max_speed: self.control.max_pinch_speed,
            frame_width: self.control.frame_width,
            frame_height: self.control.frame_height,
        }
    }

    /// Per-send transport timeout
    #[must_use]
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.vehicle.send_timeout_ms)
    }

    /// Create the transport sink from configuration
    #[must_use]
    pub fn create_transport(&self, dry_run: bool) -> Box<dyn TransportSink> {
        if dry_run {
            Box::new(LogTransport)
        } else {
            Box::new(HttpTransport::new(&self.vehicle.base_url, self.send_timeout()))
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.control_variant()?;

        // Validate the vehicle link
        if !self.vehicle.base_url.starts_with("http://") && !self.vehicle.base_url.starts_with("https://") {
            return Err(Error::ConfigError(
                "Vehicle base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.vehicle.send_timeout_ms == 0 {
            return Err(Error::ConfigError("Send timeout must be greater than 0".to_string()));
        }

        // Speeds ride the wire as a single decimal digit
        if self.control.max_finger_speed > 9 {
            return Err(Error::ConfigError(
                "Finger speed ceiling must be a single digit (0-9)".to_string(),
            ));
        }
        if self.control.max_pinch_speed > 9 {
            return Err(Error::ConfigError(
                "Pinch speed ceiling must be a single digit (0-9)".to_string(),
            ));
        }

        // Validate pinch calibration
        if self.control.pinch_min_distance < 0.0 {
            return Err(Error::ConfigError(
                "Pinch distances must be non-negative".to_string(),
            ));
        }
        if self.control.pinch_max_distance <= self.control.pinch_min_distance {
            return Err(Error::ConfigError(
                "Pinch max distance must exceed min distance".to_string(),
            ));
        }
        if self.control.frame_width == 0 || self.control.frame_height == 0 {
            return Err(Error::ConfigError(
                "Frame dimensions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Drive Configuration

# Vehicle link
vehicle:
  base_url: "http://192.168.4.1"
  send_timeout_ms: 200

# Gesture control
control:
  variant: "finger-count"
  max_finger_speed: 5
  pinch_min_distance: 20.0
  pinch_max_distance: 200.0
  max_pinch_speed: 9
  frame_width: 640
  frame_height: 480

# Replay source
replay:
  fps: 0
"#;
