//! Gesture-controlled driving library for small remote vehicles.
//!
//! This library turns per-frame hand landmarks into discrete motion
//! commands and ships them to a vehicle over a lossy HTTP link:
//! 1. Finger-state extraction from 21-point hand landmark sets
//! 2. Gesture classification into a driving direction and speed step
//! 3. Role assignment (right hand steers, left hand throttles)
//! 4. Change-driven dispatch with a hard per-send timeout
//!
//! Camera capture and the hand-tracking model stay out of process; any
//! producer of JSON-lines landmark frames can feed the engine through
//! the `LandmarkSource` seam.
//!
//! # Examples
//!
//! ## Replaying a capture against a vehicle
//!
//! ```no_run
//! use gesture_drive::app::DriveApp;
//! use gesture_drive::config::Config;
//! use gesture_drive::source::ReplaySource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let source = Box::new(ReplaySource::from_path("capture.jsonl")?);
//! let transport = config.create_transport(false);
//!
//! let mut app = DriveApp::new(&config, source, transport)?;
//! let summary = app.run()?;
//! println!("{} commands sent over {} frames", summary.sent, summary.frames);
//! # Ok(())
//! # }
//! ```
//!
//! ## Classifying a finger pattern
//!
//! ```
//! use gesture_drive::classifier::classify_direction;
//! use gesture_drive::command::Direction;
//! use gesture_drive::fingers::FingerState;
//!
//! // Index finger alone drives forward
//! let fingers = FingerState([false, true, false, false, false]);
//! assert_eq!(classify_direction(fingers), Direction::Forward);
//!
//! // Anything untrained is a stop
//! let fingers = FingerState([true, true, true, true, true]);
//! assert_eq!(classify_direction(fingers), Direction::Stop);
//! ```
//!
//! ## Debounced dispatch
//!
//! ```
//! use gesture_drive::dispatch::{DispatchGate, DispatchOutcome};
//! use gesture_drive::transport::LogTransport;
//!
//! let mut gate = DispatchGate::new(Box::new(LogTransport));
//! assert_eq!(gate.offer("F3"), DispatchOutcome::Sent);
//! assert_eq!(gate.offer("F3"), DispatchOutcome::Suppressed);
//! assert_eq!(gate.offer("S3"), DispatchOutcome::Sent);
//! ```

/// Hand landmark data model
pub mod landmarks;

/// Finger state extraction from hand landmarks
pub mod fingers;

/// Gesture classification into directions and speed steps
pub mod classifier;

/// Hand role assignment and cross-frame control state
pub mod roles;

/// Motion command encoding
pub mod command;

/// Change-driven command dispatch
pub mod dispatch;

/// Transport sinks for delivering commands
pub mod transport;

/// Landmark frame sources
pub mod source;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
