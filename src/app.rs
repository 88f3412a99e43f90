//! Main application module for gesture driving.
//!
//! Wires the pipeline together and runs it frame-synchronously: resolve
//! roles, advance the control state, offer the encoded command to the
//! dispatch gate. The only blocking call per iteration is the transport
//! send, which is capped by its own timeout.

use crate::config::Config;
use crate::dispatch::{DispatchGate, DispatchOutcome, TransportSink};
use crate::error::Result;
use crate::landmarks::LandmarkFrame;
use crate::roles::{ControlState, FrameHands};
use crate::source::LandmarkSource;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Counters accumulated over one run of the control loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames consumed from the source
    pub frames: u64,
    /// Commands delivered to the transport
    pub sent: u64,
    /// Commands suppressed by the debounce gate
    pub suppressed: u64,
    /// Delivery attempts that failed
    pub failed: u64,
}

/// Main application struct
pub struct DriveApp {
    state: ControlState,
    gate: DispatchGate,
    source: Box<dyn LandmarkSource>,
    frame_interval: Option<Duration>,
}

impl DriveApp {
    /// Create the application from configuration, a landmark source and
    /// a transport sink
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid.
    pub fn new(
        config: &Config,
        source: Box<dyn LandmarkSource>,
        transport: Box<dyn TransportSink>,
    ) -> Result<Self> {
        config.validate()?;

        let variant = config.control_variant()?;
        info!(
            "Initializing gesture drive: {:?} variant, {} transport",
            variant,
            transport.name()
        );

        let frame_interval = if config.replay.fps > 0 {
            Some(Duration::from_secs_f64(1.0 / f64::from(config.replay.fps)))
        } else {
            None
        };

        Ok(Self {
            state: ControlState::new(
                variant,
                config.pinch_calibration(),
                config.control.max_finger_speed,
            ),
            gate: DispatchGate::new(transport),
            source,
            frame_interval,
        })
    }

    /// Run the control loop until the source ends
    pub fn run(&mut self) -> Result<RunSummary> {
        let stop = AtomicBool::new(false);
        self.run_until(&stop)
    }

    /// Run the control loop until the source ends or `stop` becomes true
    pub fn run_until(&mut self, stop: &AtomicBool) -> Result<RunSummary> {
        info!("Entering control loop");

        let mut summary = RunSummary::default();
        let started = Instant::now();

        while !stop.load(Ordering::SeqCst) {
            let frame_started = Instant::now();

            let frame = match self.source.next_frame()? {
                Some(frame) => frame,
                None => {
                    info!("End of landmark stream");
                    break;
                }
            };

            self.step(&frame, &mut summary);

            // Pace replay to the configured frame rate
            if let Some(interval) = self.frame_interval {
                let elapsed = frame_started.elapsed();
                if elapsed < interval {
                    thread::sleep(interval - elapsed);
                }
            }
        }

        info!(
            "Control loop finished after {:.1}s: {} frames, {} sent, {} suppressed, {} failed",
            started.elapsed().as_secs_f64(),
            summary.frames,
            summary.sent,
            summary.suppressed,
            summary.failed
        );

        Ok(summary)
    }

    /// Process one landmark frame end to end
    pub fn step(&mut self, frame: &LandmarkFrame, summary: &mut RunSummary) {
        summary.frames += 1;
        let hands = FrameHands::resolve(frame);
        let token = self.state.advance(&hands).encode();

        debug!("Frame {} command {}", summary.frames, token);

        match self.gate.offer(&token) {
            DispatchOutcome::Sent => summary.sent += 1,
            DispatchOutcome::Suppressed => summary.suppressed += 1,
            DispatchOutcome::Failed => summary.failed += 1,
        }
    }

    /// Last token known to have reached the vehicle
    #[must_use]
    pub fn last_sent(&self) -> Option<&str> {
        self.gate.last_sent()
    }
}
